//! Property-based tests for the validation rules

#![allow(clippy::unwrap_used)] // Tests can unwrap

use proptest::prelude::*;
use ticket_ledger_contracts::{
    EventCommand, EventState, LedgerTransaction, TicketCommand, TicketStatus, validate,
};
use ticket_ledger_core::{LinearId, Rejections};
use ticket_ledger_testing::fixtures::{agency, customer, issuer, ticket_pointers, upcoming_event};
use ticket_ledger_testing::properties::{
    arb_event_status, arb_new_ticket, arb_party, arb_ticket_status, arb_upcoming_event,
};

fn create_event(event: EventState) -> LedgerTransaction {
    LedgerTransaction::builder()
        .output(event)
        .command(EventCommand::Create)
        .signer(*agency().owning_key())
        .build()
}

fn first_message(verdict: &Result<(), Rejections>) -> Option<String> {
    verdict
        .as_ref()
        .err()
        .map(|rejections| rejections.first().message().to_string())
}

proptest! {
    #[test]
    fn prop_validation_is_deterministic(event in arb_upcoming_event()) {
        let tx = create_event(event);
        prop_assert_eq!(validate(&tx), validate(&tx));
    }

    #[test]
    fn prop_capacity_bounds_ticket_list(event in arb_upcoming_event()) {
        let capacity = event.details().unwrap().capacity.value();
        let tickets = event.tickets().len();
        let verdict = validate(&create_event(event));

        let message = first_message(&verdict);
        if tickets == 0 {
            prop_assert_eq!(
                message.as_deref(),
                Some("Ticket list must be initialised and updated.")
            );
        } else if tickets > capacity as usize {
            let message = message.unwrap();
            prop_assert!(message.starts_with(
                "Ticket list size must be less than or equal to event capacity"
            ));
        } else {
            prop_assert!(verdict.is_ok());
        }
    }

    #[test]
    fn prop_status_holder_coupling(
        ticket in arb_new_ticket(),
        status in arb_ticket_status(),
        holder_is_issuer in any::<bool>(),
    ) {
        let holder = if holder_is_issuer { issuer() } else { customer() };
        let candidate = ticket.with_status(Some(status)).with_holder(holder);
        let tx = LedgerTransaction::builder()
            .input(candidate)
            .command(TicketCommand::Complete)
            .signer(*issuer().owning_key())
            .build();

        let coupled = match status {
            TicketStatus::New => holder_is_issuer,
            TicketStatus::Booked => !holder_is_issuer,
            TicketStatus::Redeemed => true,
        };
        prop_assert_eq!(validate(&tx).is_ok(), coupled);
    }

    #[test]
    fn prop_linear_identity_is_preserved(
        ticket in arb_new_ticket(),
        swap_event_id in any::<bool>(),
        swap_ticket_id in any::<bool>(),
    ) {
        let event = upcoming_event(1);
        let started = if swap_event_id {
            event.start().with_linear_id(LinearId::new())
        } else {
            event.start()
        };
        let start = LedgerTransaction::builder()
            .input(event)
            .output(started)
            .command(EventCommand::Start)
            .signer(*agency().owning_key())
            .build();
        prop_assert_eq!(validate(&start).is_ok(), !swap_event_id);

        let booked = if swap_ticket_id {
            ticket.book(customer()).with_linear_id(LinearId::new())
        } else {
            ticket.book(customer())
        };
        let book = LedgerTransaction::builder()
            .input(ticket)
            .output(booked)
            .command(TicketCommand::Book)
            .signer(*customer().owning_key())
            .build();
        let verdict = validate(&book);
        prop_assert_eq!(verdict.is_ok(), !swap_ticket_id);
        if swap_ticket_id {
            let message = first_message(&verdict);
            prop_assert_eq!(
                message.as_deref(),
                Some("When the Command is Book the LinearID must not change.")
            );
        }
    }

    #[test]
    fn prop_terminal_events_hold_no_tickets(status in arb_event_status(), count in 0usize..4) {
        let event = upcoming_event(1);
        let output = event.with_status(Some(status)).with_tickets(ticket_pointers(count));
        let tx = LedgerTransaction::builder()
            .input(event)
            .output(output)
            .command(EventCommand::Start)
            .signer(*agency().owning_key())
            .build();

        let violated = status.is_terminal() && count > 0;
        let message = first_message(&validate(&tx));
        prop_assert_eq!(
            message.as_deref() == Some("List of event tickets must be empty."),
            violated
        );
    }

    #[test]
    fn prop_signer_must_be_listed(party in arb_party()) {
        let event = upcoming_event(1);
        let tx = LedgerTransaction::builder()
            .output(event)
            .command(EventCommand::Create)
            .signer(*party.owning_key())
            .build();

        prop_assert_eq!(validate(&tx).is_ok(), party.owning_key() == agency().owning_key());
    }
}

#[test]
fn test_concurrent_validation_agrees() {
    let transactions: Vec<LedgerTransaction> =
        (0..8).map(|n| create_event(upcoming_event(n))).collect();
    let expected: Vec<_> = transactions.iter().map(validate).collect();

    let verdicts: Vec<Vec<_>> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| transactions.iter().map(validate).collect::<Vec<_>>()))
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    for verdict in verdicts {
        assert_eq!(verdict, expected);
    }
}
