pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const FOLDER: &str = "📂";
    pub const STATS: &str = "📊";
    pub const LINK: &str = "🔗";
    pub const INFO: &str = "ℹ️";
    pub const CHECK: &str = "✅";
    pub const DATABASE: &str = "🗄️";
}
