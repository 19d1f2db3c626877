mod renderer;

use std::path::PathBuf;

use anyhow::Result;
use folio_glass_core::content::SiteContent;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let content = if let Some(arg) = args.get(1) {
        let path = PathBuf::from(arg);
        let data = std::fs::read(&path)?;
        SiteContent::from_json(&data)?
    } else {
        SiteContent::default_content()
    };

    renderer::render_tui(&content)?;
    Ok(())
}
