// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Menucal v{} - Converts school-menu documents into calendar events",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} generate <text-file> --level <level> --meal <meal> [options]",
        binary_name
    );
    println!(
        "    {} upload <text-file> --level <level> --meal <meal> [--calendar <id>] [options]",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("The input is document text already extracted from a PDF/DOCX menu,");
    println!("one line per menu line. Every \"Month Day\" line starts a new all-day");
    println!("event; the lines after it become the event description.");
    println!();
    println!("OPTIONS:");
    println!("    --level <level>       School level: k12, elementary, middle, high, bic, prek");
    println!("    --meal <meal>         Meal type: breakfast, lunch, afterschoolsnack, snack");
    println!("    --lang <tag>          Content language: en (default) or es");
    println!("    --date-lang <tag>     Language of the date lines, when it differs from --lang");
    println!("    --year <year>         Reference year for the undated menus (default: this year)");
    println!("    --out <dir>           Output directory for generated .ics files (generate only)");
    println!("    --calendar <id>       Target calendar id (upload only; overrides the config)");
    println!("    -v, --verbose         Debug logging");
    println!("    -h, --help            Show this help message");
    println!();
    println!("GENERATE COMMAND:");
    println!(
        "    {} generate march_menu.txt --level elementary --meal lunch",
        binary_name
    );
    println!("        Writes english_elementary_lunch.ics to the current directory.");
    println!();
    println!("UPLOAD COMMAND:");
    println!(
        "    {} upload march_menu.txt --level k12 --meal breakfast --lang es",
        binary_name
    );
    println!("        Pushes the extracted events, skipping any day that already has");
    println!("        an event on the target calendar, so re-runs never duplicate.");
    println!();
    println!("CONFIGURATION (config.toml in the menucal config directory):");
    println!("    api_token             Bearer token for the calendar store");
    println!("    calendar_ids          Map from menu key (english_k12_lunch) to calendar id");
    println!("    default_calendar      Fallback calendar id");
    println!("    title_prefix          Prefix for every event title, e.g. the district name");
}
