use std::fmt;

use anyhow::{anyhow, Context, Result};

// コマンドライン引数のオプション値を取得
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| anyhow!("{}: value missing", opt))?;
    n.parse()
        .map_err(|e| anyhow!("{}: {} '{}'", opt, e, n))
}

pub fn unixtime_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64 / 1000.0)
        .unwrap_or(0.0)
}

pub fn write_to_file(file_path: &str, data: &str) -> Result<()> {
    let path = std::path::Path::new(file_path);
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)
            .with_context(|| format!("failed to create {}", prefix.display()))?;
    }
    std::fs::write(path, data).with_context(|| format!("failed to write {}", file_path))
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_next_value() {
    let args: Vec<String> = ["12", "x"].iter().map(|s| s.to_string()).collect();
    let mut it = args.iter();
    let n: u64 = next_value(&mut it, "-s").unwrap();
    assert_eq!(n, 12);
    assert!(next_value::<u64>(&mut it, "-s").is_err());
    assert!(next_value::<u64>(&mut it, "-s").is_err());
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
}
