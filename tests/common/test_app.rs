use bevy::{asset::AssetPlugin, input::InputPlugin, prelude::*, state::app::StatesPlugin};
use mapflyer::{
    plugins::{
        AppState, FlightPlugin, RenderLoopPlugin, ShaderPlugin, StagingPlugin,
        TextureLoadingPlugin,
    },
    rendering::ProgramCache,
    resources::{FlightSession, RenderLoop, SimulationConfig, SnapshotFeed},
};
use std::{thread, time::Duration};

// Builder for a headless application running the flight loop without a GPU
pub struct TestAppBuilder {
    config: SimulationConfig,
    session: Option<FlightSession>,
    start_running: bool,
    texture_loading: bool,
    shaders: bool,
    program_cache: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            session: None,
            start_running: true,
            texture_loading: false,
            shaders: false,
            program_cache: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_session(mut self, session: FlightSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Stay in `Loading` instead of entering `Running` during `build`.
    pub fn loading(mut self) -> Self {
        self.start_running = false;
        self
    }

    /// Request the map and aircraft textures at startup.
    pub fn with_texture_loading(mut self) -> Self {
        self.texture_loading = true;
        self
    }

    /// Register the shader programs at startup. There is no render device
    /// in a headless app.
    pub fn with_shaders(mut self) -> Self {
        self.shaders = true;
        self
    }

    /// Shader assets and an empty program cache, without the materials.
    pub fn with_program_cache(mut self) -> Self {
        self.program_cache = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.insert_resource(self.config)
            .add_plugins(MinimalPlugins)
            .add_plugins((StatesPlugin, InputPlugin))
            .add_plugins((StagingPlugin, FlightPlugin, RenderLoopPlugin));

        if self.texture_loading || self.shaders || self.program_cache {
            app.add_plugins(AssetPlugin::default())
                .init_asset::<Image>()
                .init_asset::<Shader>();
        }
        if self.shaders {
            app.add_plugins(ShaderPlugin);
        } else if self.program_cache {
            app.init_resource::<ProgramCache>();
        }
        if self.texture_loading {
            app.add_plugins(TextureLoadingPlugin);
        }

        if let Some(session) = self.session {
            app.insert_resource(session);
        }

        if self.start_running {
            app.world_mut()
                .resource_mut::<NextState<AppState>>()
                .set(AppState::Running);
        }

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Run frames until `done` holds, at most `max_steps`. Returns the
    /// number of frames run.
    pub fn run_until(&mut self, max_steps: usize, done: impl Fn(&FlightSession) -> bool) -> usize {
        for step in 0..max_steps {
            if done(self.session()) {
                return step;
            }
            self.app.update();
        }
        assert!(done(self.session()), "condition not met within {} frames", max_steps);
        max_steps
    }

    /// Run frames until the app reaches `state`, giving background asset
    /// loads time to finish. Returns the number of frames run.
    pub fn run_until_state(&mut self, max_steps: usize, state: AppState) -> usize {
        for step in 0..max_steps {
            if self.state() == state {
                return step;
            }
            self.app.update();
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(self.state(), state, "state not reached within {} frames", max_steps);
        max_steps
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Press and release `key` over two frames.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.run_frame();
        self.release(key);
        self.run_frame();
    }

    pub fn session(&self) -> &FlightSession {
        self.app.world().resource::<FlightSession>()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        self.app.world().resource::<RenderLoop>()
    }

    pub fn render_loop_mut(&mut self) -> Mut<RenderLoop> {
        self.app.world_mut().resource_mut::<RenderLoop>()
    }

    pub fn feed_mut(&mut self) -> Mut<SnapshotFeed> {
        self.app.world_mut().resource_mut::<SnapshotFeed>()
    }

    pub fn state(&self) -> AppState {
        *self.app.world().resource::<State<AppState>>().get()
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }
}
