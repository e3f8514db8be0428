/*
[INPUT]:  MOMENTUM_TOKEN environment variable (optional)
[OUTPUT]: Console listing of statuses, priorities, departments and task counts
[POS]:    Examples - read-only API tour
[UPDATE]: When lookup endpoints change
*/

use momentum_adapter::*;

/// Example: fetch every lookup table and group tasks by status
#[tokio::main]
async fn main() {
    println!("=== Momentum Lookup Example ===\n");

    let mut client = match MomentumClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    match std::env::var("MOMENTUM_TOKEN") {
        Ok(token) => client.set_credentials(Credentials::bearer(token)),
        Err(_) => println!("MOMENTUM_TOKEN not set, requests will be anonymous"),
    }

    let (statuses, priorities, departments, tasks) = tokio::join!(
        client.get_statuses(),
        client.get_priorities(),
        client.get_departments(),
        client.get_tasks(),
    );

    println!("Priorities:");
    for priority in &priorities {
        println!("  {:>2}  {}", priority.id, priority.name);
    }

    println!("\nDepartments:");
    for department in &departments {
        println!("  {:>2}  {}", department.id, department.name);
    }

    println!("\nStatuses:");
    for status in &statuses {
        let count = tasks
            .iter()
            .filter(|task| task.effective_status_id() == Some(status.id))
            .count();
        println!("  {:>2}  {:<24} {} task(s)", status.id, status.name, count);
    }
}
