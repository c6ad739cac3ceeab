use crate::common::*;

#[doc = "Installs the global logger: daily rotated file logs under ./logs, duplicated to stdout"]
pub fn set_global_logger() {
    let log_directory: &str = "logs";
    let file_spec: FileSpec = FileSpec::default().directory(log_directory);

    Logger::try_with_str("info")
        .expect("Failed to build logger specification")
        .log_to_file(file_spec)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .expect("Failed to start logger");
}

#[doc = "Log line format shared by the file and stdout writers"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        &record.args()
    )
}
