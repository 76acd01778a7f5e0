use std::path::PathBuf;
use std::sync::Arc;

/// One resolved asset placed into the output tree.
#[derive(Clone, Debug)]
pub struct Progress {
    pub id: String,
    pub real_path: String,
}

#[derive(Clone, Default)]
pub struct ExtractOptions {
    pub output_base_dir: Option<PathBuf>,
    pub force: bool,
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl ExtractOptions {
    /// Base directory the output tree is created under. Defaults to the
    /// source file's own directory.
    pub fn output_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_base_dir = Some(dir.into());
        self
    }

    /// Delete an already-existing output directory instead of refusing.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(&Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }
}
