// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner(api_base_url: &str) {
    let banner = r#"
            _               _ _            _
   ___ __ _| | ___      ___| (_) ___ _ __ | |_
  / __/ _` | |/ __|____/ __| | |/ _ \ '_ \| __|
 | (_| (_| | | (_|_____| (__| | |  __/ | | | |_
  \___\__,_|_|\___|     \___|_|_|\___|_| |_|\__|

    Expression Evaluation Client
"#;
    println!("{}", banner);
    println!("🔗 Evaluation service: {}", api_base_url);
    println!("   Type 'help' for commands.\n");
}
