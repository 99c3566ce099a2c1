//! Example showing both pane alignment policies on the same input
//!
//! Run with: cargo run --example compare_demo

use diff_desk::compare::{CompareOptions, CompareRequest, EngineLimits, compare};
use diff_desk::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = CompareRequest::new(
        "alpha\nbeta\ngamma\ndelta\n",
        "alpha\ngamma\ngamma prime\ndelta\n",
    );
    let limits = EngineLimits::default();

    println!("=== Padded panes ===\n");
    let outcome = compare(&request, &CompareOptions::padded(), &limits)?;
    println!("--- left ---\n{}\n", outcome.left.text());
    println!("--- right ---\n{}\n", outcome.right.text());
    println!(
        "Annotations: {}",
        serde_json::to_string(&outcome.right.annotations)?
    );

    println!("\n=== Two columns ===\n");
    let outcome = compare(&request, &CompareOptions::filtered(), &limits)?;
    for line in &outcome.right.lines {
        println!("{:>3} {:<15} {}", line.number, line.class.css_name(), line.text);
    }

    println!("\n=== JSON ===\n");
    println!("{}", json::format(r#"{"name":"diff desk","panes":2}"#, 2)?);

    Ok(())
}
