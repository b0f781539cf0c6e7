use std::collections::HashMap;

use crate::scene::scene::Scene;

pub trait SceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Scene;
}
