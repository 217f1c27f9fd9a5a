use crate::types::SupplyChainEmission;

pub const CSV_HEADER: &str = "Source,Emissions (tons),Percent,Optimization Potential (%)";

/// Render emission rows as the exported CSV: header line plus one line per
/// row, `\n`-separated, no trailing newline.
pub fn to_csv(rows: &[SupplyChainEmission]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "{},{},{},{}",
                r.source, r.emissions, r.percentage, r.optimization_potential
            )
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

pub fn total_emissions(rows: &[SupplyChainEmission]) -> f64 {
    rows.iter().map(|r| r.emissions).sum()
}

/// Tons that could be cut from one source at its optimization potential.
pub fn reducible_tons(row: &SupplyChainEmission) -> f64 {
    row.emissions * row.optimization_potential / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn csv_matches_export_layout() {
        let csv = to_csv(&fixtures::supply_chain_emissions());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Fertilizer Production,1450,34,22");
        assert_eq!(lines[5], "Packaging,320,7,10");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn empty_rows_keep_header() {
        assert_eq!(to_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn totals() {
        let rows = fixtures::supply_chain_emissions();
        assert_eq!(total_emissions(&rows), 4180.0);
        assert_eq!(reducible_tons(&rows[0]), 319.0);
    }
}
