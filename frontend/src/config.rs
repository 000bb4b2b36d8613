use log::Level;

// Images are served next to index.html
const ASSET_BASE: &str = "./";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Reveal and menu transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(file: &str) -> String {
    format!("{}{}", ASSET_BASE, file.trim_start_matches("./"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_joins_base() {
        assert_eq!(asset_url("hero.png"), "./hero.png");
        assert_eq!(asset_url("./logo.png"), "./logo.png");
    }
}
