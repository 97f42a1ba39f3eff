use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("ensaluti")
        .about("Credential registration and login service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("3000")
                .env("ENSALUTI_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("store")
                .short('s')
                .long("store")
                .help("Path to the credential store file, a JSON array of username/password records")
                .env("ENSALUTI_STORE")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ENSALUTI_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ensaluti");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Credential registration and login service"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_port_and_store() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "ensaluti",
            "--port",
            "3000",
            "--store",
            "/tmp/database.txt",
        ]);

        assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(3000));
        assert_eq!(
            matches.get_one::<PathBuf>("store").cloned(),
            Some(PathBuf::from("/tmp/database.txt"))
        );
    }

    #[test]
    fn test_port_default() {
        temp_env::with_vars([("ENSALUTI_PORT", None::<String>)], || {
            let command = new();
            let matches =
                command.get_matches_from(vec!["ensaluti", "--store", "/tmp/database.txt"]);
            assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(3000));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ENSALUTI_PORT", Some("8443")),
                ("ENSALUTI_STORE", Some("/var/lib/ensaluti/database.txt")),
                ("ENSALUTI_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);
                assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(8443));
                assert_eq!(
                    matches.get_one::<PathBuf>("store").cloned(),
                    Some(PathBuf::from("/var/lib/ensaluti/database.txt"))
                );
                assert_eq!(matches.get_one::<u8>("verbosity").map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("ENSALUTI_LOG_LEVEL", Some(level)),
                    ("ENSALUTI_STORE", Some("/tmp/database.txt")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["ensaluti"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").map(|s| *s),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("ENSALUTI_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "ensaluti".to_string(),
                    "--store".to_string(),
                    "/tmp/database.txt".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
