// src/presentation.rs
use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table};
use daily_avg_domain::Aggregate;
use daily_avg_shared_kernel::Result;
use daily_avg_usecase::{Bucket, Extreme};

use crate::config::OutputFormat;

pub fn write_aggregates<W: Write>(out: &mut W, rows: &[Aggregate], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", aggregate_table(rows))?;
            writeln!(out, "{} aggregate(s)", rows.len())?;
        }
        OutputFormat::Csv => write_sv(out, rows, ",")?,
        OutputFormat::Tsv => write_sv(out, rows, "\t")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?,
        OutputFormat::Jsonl => {
            for row in rows {
                writeln!(out, "{}", serde_json::to_string(row)?)?;
            }
        }
        OutputFormat::Md => write_markdown(out, rows)?,
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(rows)?)?,
    }
    Ok(())
}

/// `label` is "Minimum" or "Maximum".
pub fn write_extreme<W: Write>(out: &mut W, label: &str, extreme: &Extreme, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{label} average: {:.2}", extreme.average)?;
            writeln!(out, "{}", aggregate_table(&extreme.aggregates))?;
        }
        OutputFormat::Md => {
            writeln!(out, "### {label} average: {:.2}", extreme.average)?;
            writeln!(out)?;
            write_markdown(out, &extreme.aggregates)?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(extreme)?)?,
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(extreme)?)?,
        OutputFormat::Csv | OutputFormat::Tsv | OutputFormat::Jsonl => {
            write_aggregates(out, &extreme.aggregates, format)?;
        }
    }
    Ok(())
}

pub fn write_buckets<W: Write>(out: &mut W, buckets: &[Bucket], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["BUCKET", "SIZE", "CHAIN"]);
            for view in buckets {
                table.add_row(vec![
                    Cell::new(view.bucket).set_alignment(CellAlignment::Right),
                    Cell::new(view.aggregates.len()).set_alignment(CellAlignment::Right),
                    Cell::new(chain_label(&view.aggregates)),
                ]);
            }
            writeln!(out, "{table}")?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = if format == OutputFormat::Csv { "," } else { "\t" };
            writeln!(out, "bucket{sep}key{sep}average{sep}count{sep}sum")?;
            for view in buckets {
                for agg in &view.aggregates {
                    writeln!(
                        out,
                        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
                        view.bucket,
                        escape_sv(agg.key(), sep),
                        agg.average(),
                        agg.count(),
                        agg.sum()
                    )?;
                }
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(buckets)?)?,
        OutputFormat::Jsonl => {
            for view in buckets {
                writeln!(out, "{}", serde_json::to_string(view)?)?;
            }
        }
        OutputFormat::Md => {
            writeln!(out, "| Bucket | Size | Chain |")?;
            writeln!(out, "|---:|---:|:---|")?;
            for view in buckets {
                let chain = chain_label(&view.aggregates).replace('|', "\\|");
                writeln!(out, "| {} | {} | {chain} |", view.bucket, view.aggregates.len())?;
            }
        }
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(buckets)?)?,
    }
    Ok(())
}

fn aggregate_table(rows: &[Aggregate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["KEY", "AVERAGE", "COUNT", "SUM"]);
    for agg in rows {
        table.add_row(vec![
            Cell::new(agg.key()),
            Cell::new(format!("{:.2}", agg.average())).set_alignment(CellAlignment::Right),
            Cell::new(agg.count()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", agg.sum())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn chain_label(aggregates: &[Aggregate]) -> String {
    aggregates.iter().map(|agg| format!("{} ({:.2})", agg.key(), agg.average())).collect::<Vec<_>>().join(" -> ")
}

fn write_sv<W: Write>(out: &mut W, rows: &[Aggregate], sep: &str) -> Result<()> {
    writeln!(out, "key{sep}average{sep}count{sep}sum")?;
    for agg in rows {
        writeln!(out, "{}{sep}{}{sep}{}{sep}{}", escape_sv(agg.key(), sep), agg.average(), agg.count(), agg.sum())?;
    }
    Ok(())
}

fn write_markdown<W: Write>(out: &mut W, rows: &[Aggregate]) -> Result<()> {
    writeln!(out, "| Key | Average | Count | Sum |")?;
    writeln!(out, "|:---|---:|---:|---:|")?;
    for agg in rows {
        let key = agg.key().replace('|', "\\|");
        writeln!(out, "| {key} | {:.2} | {} | {:.2} |", agg.average(), agg.count(), agg.sum())?;
    }
    Ok(())
}

fn escape_sv(field: &str, sep: &str) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Aggregate> {
        let mut a = Aggregate::new("2014-02-13", 10.0);
        a.accumulate(30.0);
        vec![a, Aggregate::new("2014-02-14", 5.5)]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_aggregates(&mut buf, &rows(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_has_header_and_rows() {
        assert_eq!(render(OutputFormat::Csv), "key,average,count,sum\n2014-02-13,20,2,40\n2014-02-14,5.5,1,5.5\n");
    }

    #[test]
    fn tsv_uses_tabs() {
        assert!(render(OutputFormat::Tsv).starts_with("key\taverage\tcount\tsum\n2014-02-13\t20\t2\t40\n"));
    }

    #[test]
    fn jsonl_is_one_object_per_line() {
        let out = render(OutputFormat::Jsonl);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["key"], "2014-02-13");
        assert_eq!(first["count"], 2);
    }

    #[test]
    fn table_and_markdown_round_to_two_places() {
        let table = render(OutputFormat::Table);
        assert!(table.contains("20.00"));
        assert!(table.contains("2 aggregate(s)"));
        let md = render(OutputFormat::Md);
        assert!(md.contains("| 2014-02-14 | 5.50 | 1 | 5.50 |"));
    }

    #[test]
    fn extreme_json_carries_the_average() {
        let extreme = Extreme { average: 20.0, aggregates: rows()[..1].to_vec() };
        let mut buf = Vec::new();
        write_extreme(&mut buf, "Minimum", &extreme, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["average"], 20.0);
        assert_eq!(value["aggregates"][0]["key"], "2014-02-13");
    }

    #[test]
    fn buckets_csv_lists_chain_members() {
        let views = vec![Bucket { bucket: 3, aggregates: rows() }, Bucket { bucket: 4, aggregates: vec![] }];
        let mut buf = Vec::new();
        write_buckets(&mut buf, &views, OutputFormat::Csv).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("3,2014-02-13,20,2,40"));
    }

    #[test]
    fn separators_in_keys_are_quoted() {
        assert_eq!(escape_sv("a,b", ","), "\"a,b\"");
        assert_eq!(escape_sv("a,b", "\t"), "a,b");
    }
}
