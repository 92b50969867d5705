use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use super::{Conversion, convert_agent};
use crate::config::Config;
use crate::skills::{Skill, load_skill, skill_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Converted(PathBuf),
    Missing(PathBuf),
    Failed(String),
}

impl EntryStatus {
    pub fn is_converted(&self) -> bool {
        matches!(self, EntryStatus::Converted(_))
    }
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub entries: Vec<(String, EntryStatus)>,
}

impl ConversionReport {
    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, status)| status.is_converted())
            .count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn summary(&self) -> String {
        format!("{}/{} skills converted", self.success_count(), self.total())
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Converts every name in order. One bad agent never stops the others.
pub fn run<I, S>(config: &Config, names: I) -> ConversionReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ConversionReport::default();

    for name in names {
        let name = name.as_ref();
        let status = match convert_agent(name, &config.source_dir, &config.dest_dir, &config.output_file)
        {
            Ok(Conversion::Converted(dest)) => EntryStatus::Converted(dest),
            Ok(Conversion::SourceMissing(source)) => EntryStatus::Missing(source),
            Err(e) => {
                tracing::debug!(name, error = %e, "Conversion failed");
                EntryStatus::Failed(format!("{:#}", e))
            }
        };
        report.entries.push((name.to_string(), status));
    }

    tracing::info!(
        converted = report.success_count(),
        total = report.total(),
        dest = %config.dest_dir.display(),
        "Conversion finished"
    );

    report
}

/// Reads back each converted skill and checks it names itself correctly.
pub fn verify<I, S>(config: &Config, names: I) -> Vec<(String, Result<Skill>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            let path = skill_path(&config.dest_dir, name, &config.output_file);
            let result = load_skill(&path).and_then(|skill| {
                if skill.name != name {
                    anyhow::bail!("Expected name '{}', found '{}'", name, skill.name);
                }
                Ok(skill)
            });
            (name.to_string(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn config_in(tmp: &TempDir) -> Config {
        let config = Config::default().resolve(tmp.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        config
    }

    #[test]
    fn empty_source_reports_zero_of_n() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);

        let report = run(&config, ["orchestrator", "steering", "bug-hunter"]);
        assert_eq!(report.summary(), "0/3 skills converted");
        assert!(
            report
                .entries
                .iter()
                .all(|(_, s)| matches!(s, EntryStatus::Missing(_)))
        );
    }

    #[test]
    fn counts_only_successes() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::write(config.source_dir.join("steering.md"), "Steer.\n").unwrap();

        let report = run(&config, ["orchestrator", "steering"]);
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.to_string(), "1/2 skills converted");
        assert_eq!(report.entries[0].0, "orchestrator");
        assert_eq!(report.entries[1].0, "steering");
    }

    #[test]
    fn failure_does_not_stop_later_entries() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::write(config.source_dir.join("steering.md"), [0xff, 0xfe]).unwrap();
        fs::write(config.source_dir.join("bug-hunter.md"), "Hunt.\n").unwrap();

        let report = run(&config, ["steering", "bug-hunter"]);
        assert!(matches!(report.entries[0].1, EntryStatus::Failed(_)));
        assert!(matches!(report.entries[1].1, EntryStatus::Converted(_)));
        assert_eq!(report.summary(), "1/2 skills converted");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn skipped_entries_stay_quiet_at_warn_level() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::write(config.source_dir.join("steering.md"), [0xff, 0xfe]).unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            run(&config, ["orchestrator", "steering"])
        });

        assert!(matches!(report.entries[0].1, EntryStatus::Missing(_)));
        assert!(matches!(report.entries[1].1, EntryStatus::Failed(_)));
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn verify_reads_back_converted_skills() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::write(
            config.source_dir.join("devops-engineer.md"),
            "---\ndescription: \"Ships it\"\n---\nPipelines.\n",
        )
        .unwrap();
        run(&config, ["devops-engineer"]);

        let results = verify(&config, ["devops-engineer", "orchestrator"]);
        let skill = results[0].1.as_ref().unwrap();
        assert_eq!(skill.summary(), "Ships it");
        assert_eq!(skill.allowed_tools, vec!["Read", "Write", "Edit", "Bash", "Glob"]);
        assert!(results[1].1.is_err());
    }
}
