use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod error;
pub mod formation;
pub mod math;
pub mod particles;
pub mod random;
pub mod scene;

pub use data::SceneConfig;
pub use error::{CrystalTreeError, Result};
pub use scene::CrystalTreeScene;

use animation::TargetStatus;

/// Install the panic hook and browser console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init (hot reload) fails harmlessly
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

fn to_js(err: CrystalTreeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Scene state exposed to JavaScript
#[wasm_bindgen]
pub struct CrystalTree {
    scene: CrystalTreeScene,
    time: f32,
}

#[wasm_bindgen]
impl CrystalTree {
    /// Create and populate a scene from a YAML config (empty for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(yaml: &str) -> std::result::Result<CrystalTree, JsValue> {
        let yaml = if yaml.trim().is_empty() { "{}" } else { yaml };
        let mut scene = CrystalTreeScene::from_yaml(yaml).map_err(to_js)?;
        scene.populate_from_config_seed();
        Ok(Self { scene, time: 0.0 })
    }

    /// Advance one frame
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.scene.tick(dt, self.time);
    }

    /// Flip between assembled and scattered; returns true when now scattered
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.scene.toggle() == TargetStatus::Scattered
    }

    #[wasm_bindgen]
    pub fn set_scattered(&mut self, scattered: bool) {
        let status = if scattered {
            TargetStatus::Scattered
        } else {
            TargetStatus::Assembled
        };
        self.scene.set_status(status);
    }

    #[wasm_bindgen]
    pub fn is_scattered(&self) -> bool {
        self.scene.status() == TargetStatus::Scattered
    }

    #[wasm_bindgen]
    pub fn is_settled(&self) -> bool {
        self.scene.is_settled()
    }

    /// Raw morph progress of one system
    #[wasm_bindgen]
    pub fn progress(&self, system: &str) -> std::result::Result<f32, JsValue> {
        Ok(self.scene.system_by_name(system).map_err(to_js)?.progress())
    }

    #[wasm_bindgen]
    pub fn instance_count(&self, system: &str) -> std::result::Result<usize, JsValue> {
        Ok(self.scene.system_by_name(system).map_err(to_js)?.len())
    }

    /// Column-major 4x4 matrices, 16 floats per instance
    #[wasm_bindgen]
    pub fn instance_matrices(&self, system: &str) -> std::result::Result<js_sys::Float32Array, JsValue> {
        let data = self.scene.system_by_name(system).map_err(to_js)?.instance_matrices();
        Ok(js_sys::Float32Array::from(data.as_slice()))
    }

    /// sRGB, 3 floats per instance
    #[wasm_bindgen]
    pub fn instance_colors(&self, system: &str) -> std::result::Result<js_sys::Float32Array, JsValue> {
        let data = self.scene.system_by_name(system).map_err(to_js)?.instance_colors();
        Ok(js_sys::Float32Array::from(data.as_slice()))
    }

    #[wasm_bindgen]
    pub fn dust_count(&self) -> usize {
        self.scene.dust().map_or(0, |dust| dust.len())
    }

    #[wasm_bindgen]
    pub fn dust_matrices(&self) -> js_sys::Float32Array {
        let data = self.scene.dust().map(|dust| dust.instance_matrices()).unwrap_or_default();
        js_sys::Float32Array::from(data.as_slice())
    }

    /// Material description of a system as YAML
    #[wasm_bindgen]
    pub fn material(&self, system: &str) -> std::result::Result<String, JsValue> {
        let kind = self.scene.system_by_name(system).map_err(to_js)?.kind();
        serde_yaml::to_string(&kind.material().properties())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
