use chrono::NaiveDate;
use personio_client::ServiceClient;

use crate::config::Secrets;

pub async fn run(client: &ServiceClient, secrets: &Secrets) -> Result<(), String> {
    println!("Scenario: time-offs");

    let start = parse_date(&secrets.sample_start_date)?;
    let end = parse_date(&secrets.sample_end_date)?;

    let time_offs = client
        .get_time_offs(Some(start), Some(end), 0, 500)
        .await
        .map_err(|e| e.to_string())?;
    println!("Time-offs between {} and {}: {}", start, end, time_offs.len());

    for time_off in time_offs.iter().take(5) {
        println!(
            "  #{} {} {} -> {} ({} days)",
            time_off.id,
            time_off.time_off_type.attributes.name,
            time_off.start_date.date_naive(),
            time_off.end_date.date_naive(),
            time_off.days_count
        );
    }

    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("Invalid date {value}: {e}"))
}
