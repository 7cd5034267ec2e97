use bevy::prelude::*;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use std::collections::HashMap;

use crate::utils::{Result, SimError};

pub const MAP_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x6d61_7066_6c79_6572_0000_0000_0000_0001);
pub const COLOR_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x6d61_7066_6c79_6572_0000_0000_0000_0002);
pub const LINE_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x6d61_7066_6c79_6572_0000_0000_0000_0003);

/// Vertex and fragment source of one program plus the names it must
/// declare for the materials to bind against.
#[derive(Debug, Clone)]
pub struct ProgramSource {
    pub label: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub slots: &'static [&'static str],
    pub handle: Handle<Shader>,
}

impl ProgramSource {
    pub fn map() -> Self {
        Self {
            label: "map",
            vertex: include_str!("shaders/map.vert.wgsl"),
            fragment: include_str!("shaders/map.frag.wgsl"),
            slots: &[
                "angle",
                "scale",
                "offset",
                "grayscale",
                "map_texture",
                "map_sampler",
                "position",
                "uv",
            ],
            handle: MAP_SHADER_HANDLE,
        }
    }

    pub fn color() -> Self {
        Self {
            label: "color",
            vertex: include_str!("shaders/color.vert.wgsl"),
            fragment: include_str!("shaders/color.frag.wgsl"),
            slots: &["color", "position"],
            handle: COLOR_SHADER_HANDLE,
        }
    }

    pub fn line() -> Self {
        Self {
            label: "line",
            vertex: include_str!("shaders/line.vert.wgsl"),
            fragment: include_str!("shaders/line.frag.wgsl"),
            slots: &["position", "color"],
            handle: LINE_SHADER_HANDLE,
        }
    }

    pub fn all() -> [ProgramSource; 3] {
        [Self::map(), Self::color(), Self::line()]
    }

    /// Join both stages into one module, check its entry points and slots,
    /// then parse and validate it. The fragment stage may use types the
    /// vertex stage declares.
    pub fn link(&self) -> Result<String> {
        if !self.vertex.contains("@vertex") || !self.vertex.contains("fn vertex(") {
            return Err(self.error("vertex stage has no `vertex` entry point"));
        }
        if !self.fragment.contains("@fragment") || !self.fragment.contains("fn fragment(") {
            return Err(self.error("fragment stage has no `fragment` entry point"));
        }

        let source = format!("{}\n{}", self.vertex, self.fragment);
        let missing: Vec<&str> = self
            .slots
            .iter()
            .copied()
            .filter(|slot| !declares(&source, slot))
            .collect();
        if !missing.is_empty() {
            return Err(self.error(format!("missing slots: {}", missing.join(", "))));
        }

        let module = naga::front::wgsl::parse_str(&source)
            .map_err(|err| self.error(err.emit_to_string(&source)))?;
        Validator::new(ValidationFlags::all(), Capabilities::default())
            .validate(&module)
            .map_err(|err| self.error(err.emit_to_string(&source)))?;
        Ok(source)
    }

    fn error(&self, reason: impl Into<String>) -> SimError {
        SimError::ShaderCompile {
            program: self.label.to_string(),
            reason: reason.into(),
        }
    }
}

/// Whether `name` occurs as a whole identifier.
fn declares(source: &str, name: &str) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    source.match_indices(name).any(|(start, _)| {
        let before = source[..start].chars().next_back();
        let after = source[start + name.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

/// Programs registered with the shader assets, by label.
#[derive(Resource, Debug, Default)]
pub struct ProgramCache {
    programs: HashMap<&'static str, Handle<Shader>>,
}

impl ProgramCache {
    pub fn compile(
        &mut self,
        shaders: &mut Assets<Shader>,
        source: &ProgramSource,
    ) -> Result<Handle<Shader>> {
        if let Some(handle) = self.programs.get(source.label) {
            return Ok(handle.clone());
        }

        let linked = source.link()?;
        shaders.insert(
            source.handle.id(),
            Shader::from_wgsl(linked, format!("mapflyer/{}.wgsl", source.label)),
        );
        debug!("Registered shader program '{}'", source.label);

        self.programs.insert(source.label, source.handle.clone());
        Ok(source.handle.clone())
    }

    /// Drop every registered program from the shader assets.
    pub fn release(&mut self, shaders: &mut Assets<Shader>) -> usize {
        let released = self.programs.len();
        for (_, handle) in self.programs.drain() {
            shaders.remove(handle.id());
        }
        released
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
