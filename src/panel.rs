//! Rendering of the clock's status page

use crate::{
    dom::{set_class, set_html, set_text, set_visible, Document},
    format::format_uptime,
    models::{DeviceStatus, UpdateCheck},
};

/// Fill the status fields, then the update state
pub fn render_status<D: Document + ?Sized>(doc: &mut D, status: &DeviceStatus) {
    set_text(doc, "hostname", &status.hostname);
    set_text(doc, "ip", &status.ip);
    set_text(doc, "ssid", &status.ssid);
    set_text(doc, "rssi", &format!("{} dBm", status.rssi));
    set_text(doc, "uptime", &format_uptime(status.uptime));
    set_text(doc, "free-heap", &format!("{} bytes", status.free_heap));
    set_text(doc, "chip-model", &status.chip_model);
    set_text(doc, "sdk-version", &status.sdk_version);

    render_update_check(doc, &status.update_check());
}

pub fn render_update_check<D: Document + ?Sized>(doc: &mut D, check: &UpdateCheck) {
    set_text(doc, "current-version", &check.current_version);
    set_text(
        doc,
        "latest-version",
        if check.latest_version.is_empty() {
            "Checking..."
        } else {
            check.latest_version.as_str()
        },
    );

    if check.update_available {
        set_html(
            doc,
            "update-info",
            &format!(
                "<strong>Update Available!</strong> Version {} is ready for installation.",
                check.latest_version
            ),
        );
        set_class(doc, "update-info", "update");
    } else {
        set_html(
            doc,
            "update-info",
            "<strong>Up to Date</strong> - You are running the latest version.",
        );
        set_class(doc, "update-info", "info");
    }

    set_visible(doc, "update-btn", check.update_available);
}
