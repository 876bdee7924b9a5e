use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the entry server binds on.
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,
    #[arg(short = 'p', long, value_name = "BIND_PORT", default_value = "8081")]
    pub bind_port: u16,
    /// Directory of static assets served under /static.
    #[arg(
        long,
        value_name = "STATIC_DIR",
        default_value = "./static",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: String,
}
