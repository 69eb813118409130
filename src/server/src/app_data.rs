use std::path::PathBuf;

use minijinja::{path_loader, Environment};

/// Process wide state handed to every request handler. Built once at
/// startup and cloned into each worker; never mutated afterwards.
#[derive(Clone)]
pub struct DiffAppData {
    pub env: Environment<'static>,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl DiffAppData {
    pub fn new(templates_dir: PathBuf, static_dir: PathBuf) -> DiffAppData {
        let mut env = Environment::new();
        // Templates resolve lazily, so a missing template surfaces as a
        // render error on the request that needs it, not at startup.
        env.set_loader(path_loader(&templates_dir));
        DiffAppData {
            env,
            templates_dir,
            static_dir,
        }
    }
}
