//! Demonstration data the store starts from.

use chrono::NaiveDate;
use nexus_core::BusinessData;
use nexus_core::accounting::{
    Account, AccountType, Asset, AssetType, Bill, BillStatus, Invoice, InvoiceItem,
    InvoiceStatus, Liability, LiabilityType, Transaction, TransactionType,
};
use nexus_core::hr::{Candidate, CandidateStage, Employee, EmployeeStatus, JobProforma};
use nexus_shared::types::{
    AssetId, BillId, CandidateId, EmployeeId, InvoiceId, LiabilityId, ProformaId, TransactionId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builds the initial data set.
#[must_use]
pub fn initial_data() -> BusinessData {
    BusinessData {
        chart_of_accounts: chart_of_accounts(),
        assets: assets(),
        liabilities: liabilities(),
        transactions: transactions(),
        invoices: invoices(),
        bills: bills(),
        employees: employees(),
        candidates: candidates(),
        job_proformas: job_proformas(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn single_line(description: &str, amount: Decimal) -> InvoiceItem {
    InvoiceItem {
        description: description.to_string(),
        quantity: Decimal::ONE,
        unit_price: amount,
        total: amount,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn chart_of_accounts() -> Vec<Account> {
    [
        ("1000", "Cash on Hand", AccountType::Asset),
        ("1100", "Accounts Receivable", AccountType::Asset),
        ("1200", "Inventory", AccountType::Asset),
        ("1500", "Furniture & Fixtures", AccountType::Asset),
        ("2000", "Accounts Payable", AccountType::Liability),
        ("2100", "Credit Card", AccountType::Liability),
        ("2500", "Bank Loan", AccountType::Liability),
        ("3000", "Owner Equity", AccountType::Equity),
        ("4000", "Sales Revenue", AccountType::Revenue),
        ("4100", "Service Revenue", AccountType::Revenue),
        ("5000", "Cost of Goods Sold", AccountType::Expense),
        ("6000", "Payroll Expense", AccountType::Expense),
        ("6100", "Rent Expense", AccountType::Expense),
        ("6200", "Utilities", AccountType::Expense),
        ("6300", "Software & IT", AccountType::Expense),
    ]
    .into_iter()
    .map(|(code, name, account_type)| Account {
        code: code.to_string(),
        name: name.to_string(),
        account_type,
        description: None,
    })
    .collect()
}

fn assets() -> Vec<Asset> {
    let asset = |id: &str,
                 name: &str,
                 value: Decimal,
                 asset_type: AssetType,
                 date_acquired: NaiveDate,
                 depreciation_rate: Option<Decimal>| Asset {
        id: AssetId::from(id),
        name: name.to_string(),
        value,
        asset_type,
        date_acquired,
        depreciation_rate,
    };

    vec![
        asset(
            "1",
            "Office HQ",
            dec!(1200000),
            AssetType::Fixed,
            date(2020, 1, 15),
            Some(dec!(2.5)),
        ),
        asset(
            "2",
            "Company Fleet",
            dec!(150000),
            AssetType::Fixed,
            date(2021, 6, 20),
            Some(dec!(15)),
        ),
        asset("3", "Cash Reserves", dec!(450000), AssetType::Current, date(2023, 1, 1), None),
        asset("4", "Software IP", dec!(800000), AssetType::Intangible, date(2019, 11, 30), None),
    ]
}

fn liabilities() -> Vec<Liability> {
    vec![
        Liability {
            id: LiabilityId::from("1"),
            name: "Mortgage".to_string(),
            amount: dec!(950000),
            liability_type: LiabilityType::LongTerm,
            due_date: date(2035, 1, 15),
            interest_rate: Some(dec!(4.5)),
        },
        Liability {
            id: LiabilityId::from("2"),
            name: "Q4 Taxes".to_string(),
            amount: dec!(45000),
            liability_type: LiabilityType::Current,
            due_date: date(2023, 12, 15),
            interest_rate: None,
        },
    ]
}

fn transactions() -> Vec<Transaction> {
    [
        (
            "101",
            date(2023, 10, 1),
            "Client Payment - Project Alpha",
            "Sales Revenue",
            dec!(15000),
            TransactionType::Income,
        ),
        (
            "102",
            date(2023, 10, 5),
            "Office Rent",
            "Rent Expense",
            dec!(4000),
            TransactionType::Expense,
        ),
        (
            "103",
            date(2023, 10, 10),
            "Consulting Services",
            "Service Revenue",
            dec!(8500),
            TransactionType::Income,
        ),
        (
            "104",
            date(2023, 10, 15),
            "Server Hosting Costs",
            "Software & IT",
            dec!(1200),
            TransactionType::Expense,
        ),
        (
            "105",
            date(2023, 10, 28),
            "Employee Payroll",
            "Payroll Expense",
            dec!(12000),
            TransactionType::Expense,
        ),
    ]
    .into_iter()
    .map(|(id, date, description, category, amount, transaction_type)| Transaction {
        id: TransactionId::from(id),
        date,
        description: description.to_string(),
        category: category.to_string(),
        amount,
        transaction_type,
        reference_id: None,
    })
    .collect()
}

fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: InvoiceId::from("INV-2023-001"),
            client_name: "Acme Corp".to_string(),
            date: date(2023, 11, 1),
            due_date: date(2023, 11, 30),
            items: vec![single_line("Web Development", dec!(5000))],
            total_amount: dec!(5000),
            status: InvoiceStatus::Sent,
            notes: None,
        },
        Invoice {
            id: InvoiceId::from("INV-2023-002"),
            client_name: "Globex Inc".to_string(),
            date: date(2023, 10, 15),
            due_date: date(2023, 11, 15),
            items: vec![single_line("Maintenance Retainer", dec!(2500))],
            total_amount: dec!(2500),
            status: InvoiceStatus::Overdue,
            notes: None,
        },
    ]
}

fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: BillId::from("BILL-001"),
            vendor_name: "AWS Services".to_string(),
            invoice_number: "AWS-8821".to_string(),
            date: date(2023, 11, 1),
            due_date: Some(date(2023, 11, 10)),
            amount: dec!(850.00),
            category: "Software & IT".to_string(),
            status: BillStatus::Pending,
        },
        Bill {
            id: BillId::from("BILL-002"),
            vendor_name: "CleanCo Facilities".to_string(),
            invoice_number: "CLN-992".to_string(),
            date: date(2023, 11, 5),
            due_date: Some(date(2023, 11, 20)),
            amount: dec!(300.00),
            category: "Utilities".to_string(),
            status: BillStatus::Received,
        },
    ]
}

fn employees() -> Vec<Employee> {
    [
        (
            "1",
            "Sarah Connor",
            "CEO",
            "Executive",
            "sarah@nexus.com",
            date(2018, 5, 1),
            &["MBA", "PMP"][..],
        ),
        (
            "2",
            "John Doe",
            "Lead Accountant",
            "Finance",
            "john@nexus.com",
            date(2020, 3, 12),
            &["CPA"][..],
        ),
        (
            "3",
            "Mike Ross",
            "General Technician",
            "IT Support",
            "mike@nexus.com",
            date(2022, 8, 15),
            &["CompTIA A+"][..],
        ),
    ]
    .into_iter()
    .map(|(id, name, role, department, email, start_date, credentials)| Employee {
        id: EmployeeId::from(id),
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        start_date,
        credentials: strings(credentials),
        status: EmployeeStatus::Active,
    })
    .collect()
}

fn candidates() -> Vec<Candidate> {
    [
        ("1", "Alice Smith", "Senior Frontend Engineer", CandidateStage::Interview),
        ("2", "Bob Johnson", "Backend Developer", CandidateStage::Applied),
        ("3", "Charlie Davis", "On-Site Technician", CandidateStage::Offer),
        ("4", "Diana Prince", "Mechanical Engineer", CandidateStage::Applied),
    ]
    .into_iter()
    .map(|(id, name, applying_for, stage)| Candidate {
        id: CandidateId::from(id),
        name: name.to_string(),
        applying_for: applying_for.to_string(),
        stage,
        resume_summary: None,
        match_score: None,
    })
    .collect()
}

fn job_proformas() -> Vec<JobProforma> {
    [
        (
            "1",
            "Senior Frontend Engineer",
            "Engineering",
            "$120k-$150k",
            "Lead our React dashboard team and architect scalable frontend solutions.",
            &["5+ years React", "TypeScript Mastery", "State Management (Redux/Zustand)"][..],
        ),
        (
            "2",
            "Frontend Developer",
            "Engineering",
            "$80k-$110k",
            "Develop user-facing features and ensure high performance of web applications.",
            &["3+ years Experience", "React.js", "CSS/Tailwind", "Responsive Design"][..],
        ),
        (
            "3",
            "Backend Developer",
            "Engineering",
            "$90k-$120k",
            "Build robust server-side logic, manage databases, and design APIs.",
            &["Node.js or Python", "SQL & NoSQL Databases", "REST/GraphQL APIs"][..],
        ),
        (
            "4",
            "QA Tester",
            "Quality Assurance",
            "$60k-$85k",
            "Execute manual and automated tests to ensure software quality before release.",
            &["Attention to Detail", "Selenium/Cypress", "JIRA", "Regression Testing"][..],
        ),
        (
            "5",
            "IT Technician",
            "IT Support",
            "$50k-$70k",
            "Provide level 1-2 support for internal employees, troubleshooting hardware and software.",
            &["Hardware Troubleshooting", "Networking Basics", "Windows/MacOS Administration"][..],
        ),
        (
            "6",
            "On-Site Technician",
            "Field Operations",
            "$55k-$75k",
            "Travel to client sites to install, maintain, and repair company equipment.",
            &[
                "Valid Driver License",
                "Field Repair Experience",
                "Physical Stamina",
                "Client Communication",
            ][..],
        ),
        (
            "7",
            "Mechanical Engineer",
            "Mechanical Dept",
            "$85k-$115k",
            "Design, analyze, and oversee the manufacturing of mechanical systems.",
            &[
                "BS in Mechanical Engineering",
                "CAD (SolidWorks/AutoCAD)",
                "Thermodynamics",
                "Prototyping",
            ][..],
        ),
    ]
    .into_iter()
    .map(|(id, title, department, salary_range, description, requirements)| JobProforma {
        id: ProformaId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        requirements: strings(requirements),
        department: department.to_string(),
        salary_range: salary_range.to_string(),
    })
    .collect()
}
