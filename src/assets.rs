//! 장식용 애니메이션(Lottie JSON) 로더.
//!
//! 어떤 실패(네트워크 오류, 200 이외의 상태, 해석 불가 본문)도 오류로 올리지 않고
//! `None`("애니메이션 없음")으로 처리한다. 변환 기능은 이 결과를 기다리지 않는다.

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// 애니메이션 재생에 필요한 메타데이터.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Animation {
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip", default)]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w", default)]
    pub width: f64,
    #[serde(rename = "h", default)]
    pub height: f64,
    #[serde(default)]
    pub layers: Vec<serde_json::Value>,
}

impl Animation {
    /// 한 번 재생하는 데 걸리는 시간(초). 프레임 정보가 잘못되면 0.
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate > 0.0 && self.out_point > self.in_point {
            (self.out_point - self.in_point) / self.frame_rate
        } else {
            0.0
        }
    }

    /// 반복 재생 중 `elapsed_secs` 시점의 진행률(0..1).
    pub fn progress_at(&self, elapsed_secs: f64) -> f32 {
        let duration = self.duration_secs();
        if duration <= 0.0 || !elapsed_secs.is_finite() {
            return 0.0;
        }
        (elapsed_secs.rem_euclid(duration) / duration) as f32
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

/// JSON 본문을 해석한다.
pub fn parse_animation(bytes: &[u8]) -> Option<Animation> {
    match serde_json::from_slice(bytes) {
        Ok(anim) => Some(anim),
        Err(err) => {
            debug!(error = %err, "애니메이션 JSON 해석 실패");
            None
        }
    }
}

/// URL 에서 애니메이션을 받아온다. 실패하면 None.
pub fn load_animation(url: &str, timeout: Duration) -> Option<Animation> {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "HTTP 클라이언트 생성 실패");
            return None;
        }
    };
    let resp = match client.get(url).send() {
        Ok(resp) => resp,
        Err(err) => {
            warn!(url, error = %err, "애니메이션 요청 실패");
            return None;
        }
    };
    let status = resp.status();
    if !status.is_success() {
        debug!(url, %status, "애니메이션 없음");
        return None;
    }
    let bytes = match resp.bytes() {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(url, error = %err, "애니메이션 본문 읽기 실패");
            return None;
        }
    };
    parse_animation(&bytes)
}

/// 백그라운드 스레드에서 애니메이션을 받아 채널로 전달한다.
/// 완료 후 `on_done` 을 호출한다(GUI 다시 그리기 요청 등).
pub fn spawn_load<F>(url: String, timeout: Duration, on_done: F) -> Receiver<Option<Animation>>
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let anim = load_animation(&url, timeout);
        // 수신 측이 먼저 닫혔으면 결과를 버린다.
        let _ = tx.send(anim);
        on_done();
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    const SAMPLE: &str = r#"{"v":"5.5.7","nm":"spinner","fr":30,"ip":0,"op":60,"w":200,"h":100,"layers":[{},{}]}"#;

    /// 요청 하나에 고정 응답을 돌려주는 로컬 서버.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let resp = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });
        format!("http://{addr}/anim.json")
    }

    #[test]
    fn parses_lottie_metadata() {
        let anim = parse_animation(SAMPLE.as_bytes()).unwrap();
        assert_eq!(anim.name.as_deref(), Some("spinner"));
        assert_eq!(anim.layer_count(), 2);
        assert!((anim.duration_secs() - 2.0).abs() < 1e-9);
        assert!((anim.progress_at(3.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn broken_frames_have_zero_duration() {
        let anim = parse_animation(br#"{"fr":0,"op":10}"#).unwrap();
        assert_eq!(anim.duration_secs(), 0.0);
        assert_eq!(anim.progress_at(1.0), 0.0);
    }

    #[test]
    fn garbage_body_is_none() {
        assert!(parse_animation(b"<html>").is_none());
    }

    #[test]
    fn loads_from_server() {
        let url = serve_once("HTTP/1.1 200 OK", SAMPLE);
        let anim = load_animation(&url, Duration::from_secs(5)).unwrap();
        assert_eq!(anim.frame_rate, 30.0);
    }

    #[test]
    fn not_found_is_none() {
        let url = serve_once("HTTP/1.1 404 Not Found", "{}");
        assert!(load_animation(&url, Duration::from_secs(5)).is_none());
    }

    #[test]
    fn refused_connection_is_none() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let url = format!("http://{addr}/anim.json");
        assert!(load_animation(&url, Duration::from_secs(2)).is_none());
    }

    #[test]
    fn background_load_reports_through_channel() {
        let url = serve_once("HTTP/1.1 200 OK", SAMPLE);
        let rx = spawn_load(url, Duration::from_secs(5), || {});
        let anim = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(anim.is_some());
    }
}
