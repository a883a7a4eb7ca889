/// Print usage to stdout.
pub fn print_help() {
    println!("randpw {}", env!("CARGO_PKG_VERSION"));
    println!("Generate cryptographically secure random passwords.");
    println!();
    println!("USAGE:");
    println!("  randpw [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -l, --length <N>    Characters in the password (default: 25)");
    println!("  -n, --no-symbols    Exclude symbols from the password");
    println!("  -c, --clip          Copy the password to the clipboard instead of printing");
    println!("  -q, --quiet         Suppress everything but the password and errors");
    println!("      --save          Store the given options as defaults");
    println!("  -h, --help          Display this help message");
    println!("  -v, --version       Display version");
    println!();
    println!("ENVIRONMENT:");
    println!("  RANDPW_LOG          Log filter for diagnostics on stderr (default: warn)");
}
