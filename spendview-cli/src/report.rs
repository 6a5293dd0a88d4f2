//! Distribution view and interactive drill-down over a classified table.

use anyhow::Result;
use spendview_core::{EnrichedTable, Session};
use std::io::{self, Write};

/// Print the category distribution, then walk the drill-down prompts
/// unless `no_prompt` is set.
pub fn run(table: EnrichedTable, currency: &str, no_prompt: bool) -> Result<()> {
    println!("Classified {} transaction(s)", table.len());
    if table.dropped > 0 {
        println!("Dropped {} malformed row(s)", table.dropped);
    }

    let mut session = Session::new();
    session.load(table);

    if session.totals().is_empty() {
        println!("\nNo transactions to display.");
        return Ok(());
    }

    print_distribution(&session, currency);

    if no_prompt {
        return Ok(());
    }
    drill_down(&mut session, currency)
}

fn print_distribution(session: &Session, currency: &str) {
    let grand: f64 = session.totals().iter().map(|t| t.total_amount).sum();

    println!("\nSpending by category:\n");
    for total in session.totals() {
        let share = if grand > 0.0 {
            total.total_amount / grand
        } else {
            0.0
        };
        let bar = "█".repeat((share * 40.0).round() as usize);
        println!(
            "  {:<9} {}{:<12.2} {:>5.1}%  {}",
            total.category.to_string(),
            currency,
            total.total_amount,
            share * 100.0,
            bar
        );
    }
}

fn drill_down(session: &mut Session, currency: &str) -> Result<()> {
    loop {
        println!("\nCategories:");
        for (i, total) in session.totals().iter().enumerate() {
            println!(
                "  {}. {} ({}{:.2})",
                i + 1,
                total.category,
                currency,
                total.total_amount
            );
        }

        let Some(choice) = prompt("Select a category (number, q to quit)")? else {
            break;
        };
        let Ok(n) = choice.parse::<usize>() else {
            println!("Not a number: {choice}");
            continue;
        };
        if n == 0 || n > session.totals().len() {
            println!("Out of range: {n}");
            continue;
        }
        let category = session.totals()[n - 1].category;
        session.select_category(category)?;

        let labels: Vec<String> = session
            .category_rows()?
            .iter()
            .map(|r| r.pick_label(currency))
            .collect();
        println!("\nTransactions under {category}:");
        for (i, label) in labels.iter().enumerate() {
            println!("  {}. {}", i + 1, label);
        }

        let Some(pick) = prompt("Choose a transaction (number, Enter to go back)")? else {
            break;
        };
        if pick.is_empty() {
            continue;
        }
        let Ok(n) = pick.parse::<usize>() else {
            println!("Not a number: {pick}");
            continue;
        };
        if n == 0 {
            println!("Out of range: {n}");
            continue;
        }

        match session.select_transaction(n - 1) {
            Ok(txn) => {
                println!("\nTransaction analysis:");
                println!("- Amount:      {}{}", currency, txn.amount);
                println!("- Sent to:     {}", txn.account_name);
                println!("- Type:        {}", txn.category);
                println!("- Date & time: {}", txn.display_timestamp);
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

/// Read one trimmed line. `None` means quit (EOF or "q").
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    if io::stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    let s = s.trim().to_string();
    if s == "q" {
        return Ok(None);
    }
    Ok(Some(s))
}
