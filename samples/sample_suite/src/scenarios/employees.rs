use personio_client::ServiceClient;
use personio_client::personio::attribute::AttributeContainer;

use crate::config::Secrets;

pub async fn run(client: &ServiceClient, secrets: &Secrets) -> Result<(), String> {
    println!("Scenario: employees");

    let employees = client.get_employees().await.map_err(|e| e.to_string())?;
    println!("Employees: {}", employees.len());

    let employee = client
        .get_employee(secrets.sample_employee_id)
        .await
        .map_err(|e| e.to_string())?;

    let first = employee.get_string_attribute("first_name").unwrap_or("?");
    let last = employee.get_string_attribute("last_name").unwrap_or("?");
    println!("Employee {}: {} {}", secrets.sample_employee_id, first, last);

    if let Some(hired) = employee.get_time_attribute("hire_date") {
        println!("Hired: {}", hired.date_naive());
    }
    if let Some(department) = employee.get_map_attribute("department") {
        let keys = department.keys().cloned().collect::<Vec<String>>();
        println!("Department attributes: {}", keys.join(", "));
    }

    Ok(())
}
