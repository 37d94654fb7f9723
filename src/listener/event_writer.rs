use log::error;
use serde_json::{json, Value};

use super::Listener;
use crate::model::*;
use crate::util::misc::{unixtime_now, write_to_file};

// [EventWriter]
// 局ごとのイベントをJSONファイルに書き出す (data/{開始時刻}/{局番号}.json)
#[derive(Debug)]
pub struct EventWriter {
    dir: String,
    start_time: u64,
    round_index: i32,
    record: Vec<Value>,
}

impl EventWriter {
    pub fn new() -> Self {
        Self::with_dir("data")
    }

    pub fn with_dir(dir: &str) -> Self {
        Self {
            dir: dir.to_string(),
            start_time: unixtime_now() as u64,
            round_index: 0,
            record: vec![],
        }
    }
}

impl Default for EventWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for EventWriter {
    fn notify_event(&mut self, _stg: &Stage, event: &Event) {
        self.record.push(json!(event));
        if let Event::RoundEnd(_) = event {
            let path = format!(
                "{}/{}/{:02}.json",
                self.dir, self.start_time, self.round_index
            );
            let res = serde_json::to_string_pretty(&self.record)
                .map_err(anyhow::Error::from)
                .and_then(|data| write_to_file(&path, &data));
            if let Err(e) = res {
                error!("{}: {}", path, e);
            }
            self.record.clear();
            self.round_index += 1;
        }
    }
}
