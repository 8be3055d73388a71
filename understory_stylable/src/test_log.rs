// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A `log` backend that records messages per test thread.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

std::thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

/// Runs `f` and returns the warning messages it logged on this thread.
pub(crate) fn warnings(f: impl FnOnce()) -> Vec<String> {
    // Only the first call installs the logger; later calls find it in place.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| {
        records
            .take()
            .into_iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message)
            .collect()
    })
}
