use anyhow::Result;

use crate::input::parse_date;
use crate::ledger::Ledger;
use crate::summary::render_report;

pub(crate) fn as_cli(args: &[String], ledger: &Ledger) -> Result<()> {
    let rest = args.get(2..).unwrap_or_default();
    match args.get(1).map(String::as_str).unwrap_or_default() {
        "summary" | "s" => cli_summary(rest, ledger),
        "path" => {
            println!("{}", ledger.path().display());
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("finledger - flat-file personal finance ledger");
    println!();
    println!("Usage: finledger [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Interactive menu");
    println!("  summary <start> <end>           Print transactions and totals (dates dd-mm-yyyy)");
    println!("  path                            Print the ledger file location");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
    println!();
    println!("Environment:");
    println!("  FINLEDGER_FILE                  Ledger file to use");
    println!("  FINLEDGER_LOG                   Log filter, e.g. debug (default: warn)");
}

fn cli_summary(args: &[String], ledger: &Ledger) -> Result<()> {
    let [start, end] = args else {
        anyhow::bail!("Usage: finledger summary <dd-mm-yyyy> <dd-mm-yyyy>");
    };
    let start = parse_date(start).map_err(|e| anyhow::anyhow!("Start date '{start}': {e}"))?;
    let end = parse_date(end).map_err(|e| anyhow::anyhow!("End date '{end}': {e}"))?;

    let records = ledger.query(start, end)?;
    print!("{}", render_report(start, end, &records));
    Ok(())
}
