use std::env;

pub const DEFAULT_LOG_FILTER: &str = "emotion_motion_core=info,tower_http=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            text: None,
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env_u16(key: &str) -> Option<u16> {
    env::var(key).ok()?.trim().parse().ok()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn apply_env(cfg: &mut Config) {
    if let Some(host) = env::var("EMOTION_HOST").ok().and_then(non_empty) {
        cfg.host = host.trim().to_string();
    }

    if let Some(port) = parse_env_u16("EMOTION_PORT") {
        cfg.port = port;
    }

    if let Some(filter) = env::var("EMOTION_LOG").ok().and_then(non_empty) {
        cfg.log_filter = filter;
    }
}

/// Applies command-line flags on top of `cfg`. Unknown flags and unparsable
/// values are skipped.
pub fn apply_args<I>(cfg: &mut Config, args: I)
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--host" => {
                if let Some(val) = args.next().and_then(non_empty) {
                    cfg.host = val.trim().to_string();
                }
            }
            "--port" => {
                if let Some(val) = args.next() {
                    if let Ok(port) = val.trim().parse::<u16>() {
                        cfg.port = port;
                    }
                }
            }
            "--log" => {
                if let Some(val) = args.next().and_then(non_empty) {
                    cfg.log_filter = val;
                }
            }
            "--text" => {
                if let Some(val) = args.next() {
                    cfg.text = Some(val);
                }
            }
            _ => {}
        }
    }
}

pub fn from_env_or_args() -> Config {
    dotenvy::dotenv().ok();

    let mut cfg = Config::default();
    apply_env(&mut cfg);
    apply_args(&mut cfg, env::args().skip(1));
    cfg
}
