/// Every pass the scene can draw, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    WorldMap,
    Trail,
    Aircraft,
    Checkpoint,
    MiniMap,
    MiniMapAircraft,
    MiniMapWaypoints,
}

impl PassKind {
    pub const ORDER: [PassKind; 7] = [
        PassKind::WorldMap,
        PassKind::Trail,
        PassKind::Aircraft,
        PassKind::Checkpoint,
        PassKind::MiniMap,
        PassKind::MiniMapAircraft,
        PassKind::MiniMapWaypoints,
    ];

    pub fn target(self) -> PassTarget {
        match self {
            PassKind::MiniMap | PassKind::MiniMapAircraft | PassKind::MiniMapWaypoints => {
                PassTarget::MiniMap
            }
            _ => PassTarget::Main,
        }
    }

    /// Sort key among transparent 2D items; later passes draw on top.
    pub fn depth(self) -> f32 {
        self as u8 as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassTarget {
    /// Full window.
    Main,
    /// Fixed-size viewport in the bottom-left corner.
    MiniMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Map,
    Aircraft,
}

/// Parameters of the map sampling shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapUniforms {
    pub angle: f32,
    pub scale: f32,
    pub offset: [f32; 2],
    pub grayscale: bool,
}

impl MapUniforms {
    pub fn identity(grayscale: bool) -> Self {
        Self {
            angle: 0.0,
            scale: 1.0,
            offset: [0.0, 0.0],
            grayscale,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Square quad `±half_extent` sampling a texture through the map shader.
    TexturedQuad {
        texture: TextureSlot,
        uniforms: MapUniforms,
        half_extent: f32,
    },
    /// Triangle list in one solid color.
    Triangles {
        vertices: Vec<[f32; 2]>,
        color: [f32; 4],
    },
    /// Connected line with a color per vertex.
    LineStrip {
        vertices: Vec<[f32; 2]>,
        colors: Vec<[f32; 4]>,
    },
}

/// One draw pass of a frame, in view coordinates of its target.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPass {
    pub kind: PassKind,
    pub target: PassTarget,
    pub primitive: Primitive,
}

impl DrawPass {
    pub fn new(kind: PassKind, primitive: Primitive) -> Self {
        Self {
            kind,
            target: kind.target(),
            primitive,
        }
    }
}

/// Everything to draw for one frame. Passes are kept in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 3],
    passes: Vec<DrawPass>,
}

impl Frame {
    pub fn new(clear_color: [f32; 3]) -> Self {
        Self {
            clear_color,
            passes: Vec::new(),
        }
    }

    pub fn push(&mut self, pass: DrawPass) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[DrawPass] {
        &self.passes
    }

    pub fn get(&self, kind: PassKind) -> Option<&DrawPass> {
        self.passes.iter().find(|pass| pass.kind == kind)
    }

    pub fn kinds(&self) -> Vec<PassKind> {
        self.passes.iter().map(|pass| pass.kind).collect()
    }
}
