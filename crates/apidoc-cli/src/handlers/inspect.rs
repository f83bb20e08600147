//! Inspect command handler

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{FlattenReport, OutputWriter};
use apidoc_schemas::loader::parse_file;
use apidoc_schemas::{SchemaFlattener, SlugStyle};
use tracing::{debug, instrument};

/// Handle the inspect command
#[instrument(skip(config, output), fields(file = %args.schema_file.display()))]
pub fn handle_inspect(args: InspectArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("inspect_command", &args.schema_file.display().to_string());

    if !args.schema_file.exists() {
        return Err(Error::FileNotFound {
            path: args.schema_file.clone(),
        });
    }

    let schema = parse_file(&args.schema_file)?;
    let slug_style = args
        .anchor_style
        .map(SlugStyle::from)
        .unwrap_or(config.render.slug_style);

    let flattened = SchemaFlattener::with_slug_style(slug_style).flatten_value(
        &schema,
        args.prefix.as_deref(),
        args.name.as_deref(),
    )?;
    debug!(objects = flattened.objects.len(), "Schema flattened");

    output.flatten_report(&FlattenReport::from(&flattened))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use apidoc_schemas::flatten_value;
    use serde_json::json;
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tempfile::Builder;

    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn schema() -> serde_json::Value {
        json!({
            "type": "object",
            "title": "Event",
            "required": ["content"],
            "properties": {
                "content": {
                    "type": "object",
                    "title": "EventContent",
                    "properties": {"body": {"type": "string"}}
                },
                "age": {"type": "integer"}
            }
        })
    }

    #[test]
    fn test_report_lists_objects_and_types() {
        let flattened = flatten_value(&schema(), Some("ev"), None).unwrap();
        let report = FlattenReport::from(&flattened);

        assert_eq!(report.root_type, "Event");
        assert_eq!(report.objects.len(), 2);
        assert_eq!(report.objects[0].anchor.as_deref(), Some("ev_event"));

        let content = &report.objects[0].properties[0];
        assert_eq!(content.name, "content");
        assert_eq!(content.type_label, "EventContent");
        assert!(content.required);
        assert!(!report.objects[0].properties[1].required);
    }

    #[test]
    fn test_inspect_json_output() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", schema()).unwrap();

        let captured = Captured::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(captured.clone()));
        let args = InspectArgs {
            schema_file: file.path().to_path_buf(),
            prefix: Some("ev".to_string()),
            name: None,
            anchor_style: None,
        };

        handle_inspect(args, &Config::default(), &mut output).unwrap();
        let written = String::from_utf8(captured.0.borrow().clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["objects"][1]["anchor"], "ev_eventcontent");
        assert_eq!(value["objects"][0]["properties"][1]["type"], "integer");
    }

    #[test]
    fn test_malformed_schema_is_reported() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "type: object\nproperties:\n  list:\n    type: array\n").unwrap();

        let mut output = OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            true,
            Box::new(std::io::sink()),
        );
        let args = InspectArgs {
            schema_file: file.path().to_path_buf(),
            prefix: None,
            name: Some("Batch".to_string()),
            anchor_style: None,
        };

        let err = handle_inspect(args, &Config::default(), &mut output).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
        assert!(err.to_string().contains("Batch.list"));
    }

    #[test]
    fn test_missing_schema_file() {
        let mut output = OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            true,
            Box::new(std::io::sink()),
        );
        let args = InspectArgs {
            schema_file: PathBuf::from("/no/such/schema.yaml"),
            prefix: None,
            name: None,
            anchor_style: None,
        };
        assert!(matches!(
            handle_inspect(args, &Config::default(), &mut output),
            Err(Error::FileNotFound { .. })
        ));
    }
}
