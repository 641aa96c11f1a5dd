//! Live SLA tracking and historical resolution duration
//!
//! Combines the business-hours clock with the ticket's pause intervals to
//! produce the remaining/overdue figures shown for open tickets, and the
//! resolution duration reported for closed ones.
//!
//! Both entry points are pure functions of stored timestamps plus an
//! externally supplied "now"; they never mutate the ticket.

use helpdesk_domain::constants::{LIVE_SLA_WINDOW, MS_PER_HOUR, RESOLUTION_WINDOW};
use helpdesk_domain::{BusinessWindow, SlaOutlook, Ticket, TicketState};

use super::business_hours::working_ms;

/// Live SLA figures for an open ticket, or `None` for a closed one.
///
/// Elapsed time is counted from the SLA epoch (`last_sla_start_at` when a
/// reassignment re-based the clock, otherwise `created_at`) under the
/// 08:00-17:00 window, with every pause interval overlapping
/// `[epoch, now]` subtracted. The result is clamped at zero before
/// converting to hours.
pub fn compute_remaining(ticket: &Ticket, sla_hours: u32, now_ms: i64) -> Option<SlaOutlook> {
    if ticket.state == TicketState::Cerrado {
        return None;
    }
    let epoch = ticket.sla_epoch();
    let gross = working_ms(epoch, now_ms, &LIVE_SLA_WINDOW);
    let paused = paused_working_ms(ticket, epoch, now_ms, &LIVE_SLA_WINDOW);
    let elapsed_ms = (gross - paused).max(0);

    let elapsed_hours = elapsed_ms as f64 / MS_PER_HOUR as f64;
    let remaining_hours = f64::from(sla_hours) - elapsed_hours;
    Some(SlaOutlook {
        elapsed_hours,
        remaining_hours,
        is_expired: remaining_hours <= 0.0,
        overdue_hours: (-remaining_hours).max(0.0),
    })
}

/// Business hours spent resolving a closed ticket, rounded to one decimal.
///
/// Applies the same business-hours and pause-subtraction algorithm between
/// the creation and closing timestamps (swapped defensively if stored
/// inverted), under the 08:00-17:30 reporting window. Returns `None` when
/// the ticket has no closing timestamp.
pub fn compute_resolution_hours(ticket: &Ticket) -> Option<f64> {
    let closed_at = ticket.resolution.as_ref().map(|info| info.at)?;
    if ticket.created_at <= 0 || closed_at <= 0 {
        return None;
    }
    let (from, until) = if ticket.created_at <= closed_at {
        (ticket.created_at, closed_at)
    } else {
        (closed_at, ticket.created_at)
    };

    let gross = working_ms(from, until, &RESOLUTION_WINDOW);
    let paused = paused_working_ms(ticket, from, until, &RESOLUTION_WINDOW);
    let elapsed_ms = (gross - paused).max(0);

    let hours = elapsed_ms as f64 / MS_PER_HOUR as f64;
    Some((hours * 10.0).round() / 10.0)
}

/// Working milliseconds covered by pauses, clipped to `[epoch, until_ms]`.
///
/// An open interval runs to `until_ms`. A ticket still carrying the
/// pre-interval flat `is_paused`/`pause_start` fields with no open
/// structured interval contributes one implicit open pause, so records
/// from the older schema keep accounting correctly without migration.
fn paused_working_ms(ticket: &Ticket, epoch: i64, until_ms: i64, window: &BusinessWindow) -> i64 {
    let mut total = 0_i64;
    for pause in &ticket.pauses {
        total += clipped_working_ms(pause.start, pause.end, epoch, until_ms, window);
    }
    if ticket.is_paused == Some(true) && !ticket.has_open_pause() {
        if let Some(start) = ticket.pause_start {
            total += clipped_working_ms(start, None, epoch, until_ms, window);
        }
    }
    total
}

fn clipped_working_ms(
    start: i64,
    end: Option<i64>,
    epoch: i64,
    until_ms: i64,
    window: &BusinessWindow,
) -> i64 {
    let clipped_start = start.max(epoch);
    let clipped_end = end.unwrap_or(until_ms).min(until_ms);
    working_ms(clipped_start, clipped_end, window)
}
