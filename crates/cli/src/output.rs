use doh_client_domain::config::DohServerConfig;
use doh_client_domain::Config;
use doh_client_domain::ResourceRecord;
use std::fmt::Write;

const SEPARATOR: &str = "----------------------------------------";

pub fn render_records(domain: &str, records: &[ResourceRecord]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "DNS records for {}:", domain);
    for record in records {
        let _ = writeln!(out, "Name: {}", record.name);
        let _ = writeln!(out, "Type: {}", record.record_type);
        let _ = writeln!(out, "TTL: {} seconds", record.ttl);
        let _ = writeln!(out, "Data: {}", record.data);
        let _ = writeln!(out, "{}", SEPARATOR);
    }
    out
}

pub fn render_servers(servers: &[&DohServerConfig]) -> String {
    let mut out = String::from("Configured DoH servers:\n");
    for server in servers {
        let methods: Vec<&str> = server.methods.iter().map(|m| m.as_str()).collect();
        let _ = writeln!(
            out,
            "  {:<14} {:<40} [{}]",
            server.name,
            server.url,
            methods.join(", ")
        );
    }
    out
}

/// One-line summary of the settings a run will use.
pub fn render_config_summary(config: &Config) -> String {
    format!(
        "server={} method={} timeout={}s connect_timeout={}s fallback={} log_level={}",
        config.resolve_server(&config.client.default_server),
        config.client.default_method.as_str(),
        config.request_timeout(),
        config.client.connect_timeout,
        config.client.enable_fallback,
        config.logging.level
    )
}
