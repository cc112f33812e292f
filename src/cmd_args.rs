use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile holding the transport settings. Default is 'default'.
    /// If the profile is not configured, the default settings are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// HTTP method, sent exactly as given
    #[clap(short = 'X', long, default_value = "GET", help = "HTTP method")]
    method: String,

    /// Request headers in "Name: value" form; repeat for several values
    #[clap(short = 'H', long = "header", help = "request header (Name: value)")]
    headers: Vec<String>,

    /// Request body
    #[clap(short = 'd', long, help = "request body")]
    data: Option<String>,

    /// Verbose mode
    /// Optional. Print response headers and cookies.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Print the whole response as JSON
    #[clap(long, help = "print the response as JSON", default_value = "false")]
    json: bool,

    /// Target URI
    url: String,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    method: String,
    headers: Vec<(String, String)>,
    data: Option<String>,
    verbose: bool,
    json: bool,
    url: String,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn method(&self) -> &String {
        &self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn data(&self) -> Option<&String> {
        self.data.as_ref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn url(&self) -> &String {
        &self.url
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            method: args.method,
            headers: args.headers.iter().map(|h| split_header(h)).collect(),
            data: args.data,
            verbose: args.verbose,
            json: args.json,
            url: args.url,
        }
    }
}

/// Split "Name: value" into its parts; a line without a colon is a name
/// with an empty value
fn split_header(raw: &str) -> (String, String) {
    match raw.split_once(':') {
        Some((name, value)) => (name.trim().to_string(), value.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
