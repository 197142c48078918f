use std::path::PathBuf;

pub fn default_true() -> bool {
    true
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_script_filename() -> String {
    "[name].js".to_string()
}

pub fn default_css_filename() -> String {
    "[name].css".to_string()
}

pub fn default_html_filename() -> String {
    "index.html".to_string()
}

pub fn default_title() -> String {
    "Stylext App".to_string()
}

pub fn default_lang() -> String {
    "en".to_string()
}

pub fn default_css_pattern() -> String {
    r"\.css$".to_string()
}
