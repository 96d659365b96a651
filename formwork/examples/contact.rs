//! Contact Form Example
//!
//! Replays a short user session against the contact form:
//! - a bad email is caught on blur
//! - editing the email clears its error straight away
//! - a submit with an invalid phone is rejected
//! - fixing the phone and submitting again is accepted and resets the form
//!
//! Log output goes to `contact.log`.

use std::fs::File;
use std::sync::Arc;

use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn print_errors(form: &FormController<MemoryAdapter>) {
    if form.store().all_clear() {
        println!("  (no errors)");
    }
    for (field, message) in form.errors() {
        println!("  {:<8} {}", field.as_str(), message);
    }
}

fn main() {
    if let Ok(log_file) = File::create("contact.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let adapter = MemoryAdapter::new()
        .with_value("name", "Ana María")
        .with_value("email", "ana.maria@example")
        .with_value("phone", "123")
        .with_value("subject", "Quote request")
        .with_value("message", "Hello, I would like a quote.");

    let mut form = FormController::new(
        Arc::new(RuleCatalog::contact_form()),
        adapter,
        FormConfig::new("contact").focus_first_invalid(true),
    );

    println!("blur email:");
    form.handle(FormEvent::blur("email"));
    print_errors(&form);

    println!("type into email:");
    form.adapter_mut().set_value("email", "ana.maria@example.com");
    form.handle(FormEvent::input("email"));
    print_errors(&form);

    println!("submit:");
    if let Some(FormOutcome::Rejected(_)) = form.handle(FormEvent::Submit) {
        print_errors(&form);
        if let Some(field) = form.adapter().focused() {
            println!("  focus -> {}", field);
        }
    }

    println!("fix phone and submit:");
    form.adapter_mut().set_value("phone", "+1 (555) 123-4567");
    if let Some(FormOutcome::Accepted) = form.handle(FormEvent::Submit) {
        for note in form.adapter().notifications() {
            println!("  {}", note);
        }
        println!("  form blank: {}", form.adapter().is_blank());
    }
}
