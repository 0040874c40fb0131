use std::process::Command;

use anyhow::Result;

fn money_tracker() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_money-tracker"));
    command.env_remove("MONEY_TRACKER_API_URL");
    command
}

#[test]
fn test_cli_lists_available_commands() -> Result<()> {
    let output = money_tracker().arg("--help").output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("list"));
    assert!(stdout.contains("new"));
    assert!(stdout.contains("summary"));
    assert!(stdout.contains("--api-url"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_api_address() -> Result<()> {
    let output = money_tracker()
        .args(["--api-url", "not a url", "list"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Invalid API base address"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_rejects_non_numeric_price_before_contacting_api() -> Result<()> {
    let output = money_tracker()
        .args(["--api-url", "http://127.0.0.1:9"])
        .args(["new", "--description", "Lanche", "--price", "noventa", "--category", "Alimentação", "--type", "outcome"])
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("'noventa' is not a number"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_transaction_type() -> Result<()> {
    let output = money_tracker()
        .args(["--api-url", "http://127.0.0.1:9"])
        .args(["new", "--description", "Pix", "--price", "10", "--category", "Outros", "--type", "transfer"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("must be 'income' or 'outcome'"));

    Ok(())
}

#[test]
fn test_cli_reports_unreachable_api() -> Result<()> {
    let output = money_tracker()
        .args(["--api-url", "http://127.0.0.1:9", "summary"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("http://127.0.0.1:9/transactions"));
    assert!(output.stdout.is_empty());

    Ok(())
}
