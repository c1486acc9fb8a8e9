use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() -> Result<(), String> {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUT_DIR).map_err(|e| format!("cannot create {}: {}", OUT_DIR, e))?;

    // main.css pulls the layout, panel and view sheets in through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("cannot bundle {}: {}", ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("cannot minify stylesheet: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("cannot print stylesheet: {}", e))?;

    fs::write(OUT_FILE, css.code).map_err(|e| format!("cannot write {}: {}", OUT_FILE, e))?;
    Ok(())
}
