//! Integration tests for target resolution and live SLA figures
//!
//! Exercises the `SlaService` facade end-to-end against a fixed
//! configuration snapshot.

mod support;

use std::collections::HashMap;
use std::sync::Arc;

use helpdesk_core::SlaService;
use helpdesk_domain::{
    Priority, SlaConfigSnapshot, SlaNode, Ticket, TicketState,
};
use support::StaticConfig;

fn ms(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

fn printer_ticket(priority: Priority, created_at: i64) -> Ticket {
    Ticket {
        id: "t-1".into(),
        code: "IT-000001".into(),
        department_id: "it".into(),
        type_name: "Hardware".into(),
        subcategory_name: "Impresoras".into(),
        priority,
        description: "x".into(),
        state: TicketState::Abierto,
        created_at,
        last_sla_start_at: None,
        resolution: None,
        assignees: Vec::new(),
        pauses: Vec::new(),
        reassignments: Vec::new(),
        comments: Vec::new(),
        creator_email: "maria@example.com".into(),
        is_paused: None,
        pause_start: None,
    }
}

fn config() -> SlaConfigSnapshot {
    let mut snapshot = SlaConfigSnapshot::default();
    snapshot
        .type_ids
        .entry("it".into())
        .or_default()
        .insert("Hardware".into(), "type-hw".into());
    snapshot
        .subcategory_ids
        .entry("type-hw".into())
        .or_default()
        .insert("Impresoras".into(), "sub-imp".into());
    snapshot
        .subcategory_hours
        .entry("it".into())
        .or_default()
        .entry("type-hw".into())
        .or_default()
        .insert("sub-imp".into(), SlaNode::ByPriority(HashMap::from([(Priority::Alta, 4)])));
    snapshot
        .department_hours
        .entry("it".into())
        .or_default()
        .insert(Priority::Alta, 24);
    snapshot
}

#[tokio::test]
async fn subcategory_target_beats_department_target() {
    let service = SlaService::new(Arc::new(StaticConfig::new(config())));
    let ticket = printer_ticket(Priority::Alta, ms(2024, 3, 4, 8, 0));
    assert_eq!(service.target_hours(&ticket).await.unwrap(), 4);
}

#[tokio::test]
async fn unconfigured_priority_falls_to_hardcoded_default() {
    let service = SlaService::new(Arc::new(StaticConfig::new(config())));
    let ticket = printer_ticket(Priority::Baja, ms(2024, 3, 4, 8, 0));
    assert_eq!(service.target_hours(&ticket).await.unwrap(), 168);
}

#[tokio::test]
async fn outlook_counts_down_against_the_resolved_target() {
    let service = SlaService::new(Arc::new(StaticConfig::new(config())));
    let ticket = printer_ticket(Priority::Alta, ms(2024, 3, 4, 8, 0));

    // Two business hours in against a 4h subcategory target.
    let outlook = service.outlook(&ticket, ms(2024, 3, 4, 10, 0)).await.unwrap().unwrap();
    assert!((outlook.elapsed_hours - 2.0).abs() < 1e-9);
    assert!((outlook.remaining_hours - 2.0).abs() < 1e-9);
    assert!(!outlook.is_expired);

    // Six business hours in, the 4h target is blown by two.
    let late = service.outlook(&ticket, ms(2024, 3, 4, 14, 0)).await.unwrap().unwrap();
    assert!(late.is_expired);
    assert!((late.overdue_hours - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn outlook_is_none_for_closed_tickets() {
    let service = SlaService::new(Arc::new(StaticConfig::new(config())));
    let mut ticket = printer_ticket(Priority::Alta, ms(2024, 3, 4, 8, 0));
    ticket.state = TicketState::Cerrado;
    assert!(service.outlook(&ticket, ms(2024, 3, 4, 10, 0)).await.unwrap().is_none());
}
