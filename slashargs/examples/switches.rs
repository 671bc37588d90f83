use core::panic;

use slashargs::CommandLineParser;

fn main() {
    let cmd_line = r#""C:\Program Files\App\setup.exe" /install "/not a switch" /Lang en"#;

    let mut parser = CommandLineParser::new();
    parser
        .parse_from_string(Some(cmd_line))
        .expect("must be parsed");

    if parser.required_switch_count() != 2 {
        panic!("invalid switch count");
    }

    let install = parser
        .required_switch_argument_value("install", 0)
        .expect("must be present");

    if install != "/not a switch" {
        panic!("invalid install argument");
    }

    if !parser.has_required_switch("LANG") {
        panic!("missing lang switch");
    }
}
