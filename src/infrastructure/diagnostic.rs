use std::io::Write;

/// DiagnosticSink は送受信の診断行の出力先。
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// 診断行を 1 行書き出す。
    fn write_line(&self, line: &str);
}

/// StdoutSink は診断行をそのまま標準出力に書き出す。
/// ログイベントは出さないので、1 行の診断につき標準出力に出るのは 1 行だけ。
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = write_line_to(&mut stdout, line) {
            tracing::warn!(error = %e, "failed to write diagnostic line to stdout");
        }
    }
}

fn write_line_to(writer: &mut impl Write, line: &str) -> std::io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}
