use async_trait::async_trait;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Node, Selector};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::source::{FoundLyrics, LookupOutcome, LookupRequest, LyricsSource};
use crate::error::{ConfigError, NetworkError, Result};

pub const DEFAULT_API_URL: &str = "https://api.genius.com";

const LYRICS_CONTAINER: &str = r#"div[data-lyrics-container="true"]"#;
const EXCLUDE_ATTR: &str = "data-exclude-from-selection";

/// Connection settings for the Genius API.
#[derive(Debug, Clone)]
pub struct GeniusSettings {
    pub api_url: String,
    pub access_token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize, Debug)]
struct SearchHit {
    #[serde(rename = "type")]
    kind: String,
    result: SongHit,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SongHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub primary_artist: Option<ArtistHit>,
    #[serde(default)]
    pub lyrics_state: Option<String>,
    #[serde(default)]
    pub instrumental: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ArtistHit {
    pub name: String,
}

impl SongHit {
    pub fn artist_name(&self) -> &str {
        self.primary_artist
            .as_ref()
            .map(|artist| artist.name.as_str())
            .unwrap_or("")
    }

    /// Genius lists unreleased and instrumental songs without lyrics.
    pub fn has_lyrics(&self) -> bool {
        let complete = self
            .lyrics_state
            .as_deref()
            .map_or(true, |state| state == "complete");
        complete && !self.instrumental
    }
}

#[derive(Clone)]
pub struct GeniusClient {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl GeniusClient {
    pub fn new(settings: &GeniusSettings) -> Result<Self> {
        let access_token = settings
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "genius_access_token".to_string(),
            })?
            .to_string();

        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("lyricloze v{}", version))
            .build()
            .map_err(NetworkError::Http)?;

        Ok(Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    #[cfg(test)]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn search(&self, query: &str) -> std::result::Result<Vec<SongHit>, NetworkError> {
        let url = format!("{}/search", self.api_url);
        info!("Searching Genius for: {}", query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("q", query)])
            .send()
            .await?;

        check_status(response.status())?;

        let envelope: SearchEnvelope = response.json().await.map_err(|e| {
            NetworkError::InvalidResponse {
                reason: e.to_string(),
            }
        })?;

        let hits: Vec<SongHit> = envelope
            .response
            .hits
            .into_iter()
            .filter(|hit| hit.kind == "song")
            .map(|hit| hit.result)
            .collect();

        debug!("Genius returned {} song hit(s)", hits.len());
        Ok(hits)
    }

    /// Download the song page and scrape its lyrics blocks.
    pub async fn fetch_lyrics(&self, hit: &SongHit) -> std::result::Result<Option<String>, NetworkError> {
        if hit.url.is_empty() {
            return Err(NetworkError::InvalidResponse {
                reason: format!("song '{}' has no page URL", hit.title),
            });
        }

        debug!("Fetching lyrics page: {}", hit.url);
        let response = self.client.get(&hit.url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(response.status())?;

        let html = response.text().await?;
        Ok(extract_lyrics(&html))
    }

    async fn find(&self, request: &LookupRequest) -> std::result::Result<Option<FoundLyrics>, NetworkError> {
        let hits = self.search(&request.search_query()).await?;

        let Some(hit) = select_best_hit(&hits, request) else {
            info!("No Genius results for: {}", request.search_query());
            return Ok(None);
        };

        if !hit.has_lyrics() {
            info!("Song has no lyrics on Genius: {} - {}", hit.artist_name(), hit.title);
            return Ok(None);
        }

        let Some(text) = self.fetch_lyrics(hit).await? else {
            info!("No lyrics found on page for: {} - {}", hit.artist_name(), hit.title);
            return Ok(None);
        };

        Ok(Some(FoundLyrics {
            title: hit.title.clone(),
            artist: hit.artist_name().to_string(),
            url: hit.url.clone(),
            text,
        }))
    }
}

#[async_trait]
impl LyricsSource for GeniusClient {
    async fn lookup(&self, request: &LookupRequest) -> LookupOutcome {
        match self.find(request).await {
            Ok(Some(found)) => LookupOutcome::Found(found),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => {
                warn!("Genius lookup failed: {}", e);
                LookupOutcome::Failed(e.to_string())
            }
        }
    }
}

fn check_status(status: StatusCode) -> std::result::Result<(), NetworkError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(NetworkError::Authentication),
        StatusCode::TOO_MANY_REQUESTS => Err(NetworkError::RateLimit),
        status => Err(NetworkError::Status { status }),
    }
}

/// Pick the hit whose title (and artist, when given) best matches the request.
///
/// Falls back to the first hit when nothing scores, the way the provider's
/// own ranking would.
pub fn select_best_hit<'a>(hits: &'a [SongHit], request: &LookupRequest) -> Option<&'a SongHit> {
    let matcher = SkimMatcherV2::default();
    let mut best: Option<(i64, &SongHit)> = None;

    for hit in hits {
        let mut score = 0i64;

        if let Some(s) = matcher.fuzzy_match(&hit.title, request.song.trim()) {
            score += s * 3;
        }

        if let Some(artist) = request.artist.as_deref() {
            if let Some(s) = matcher.fuzzy_match(hit.artist_name(), artist) {
                score += s * 2;
            }
        }

        if score > 0 && best.map_or(true, |(top, _)| score > top) {
            best = Some((score, hit));
        }
    }

    best.map(|(_, hit)| hit).or_else(|| hits.first())
}

/// Lyrics text from a Genius song page, or `None` when the page has none.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LYRICS_CONTAINER).expect("valid lyrics container selector");

    let blocks: Vec<String> = document
        .select(&selector)
        .map(|container| {
            let mut text = String::new();
            collect_text(container, &mut text);
            text
        })
        .collect();

    let lyrics = blocks.join("\n").trim().to_string();
    if lyrics.is_empty() {
        None
    } else {
        Some(lyrics)
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) if el.attr(EXCLUDE_ATTR) == Some("true") => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"{
        "meta": {"status": 200},
        "response": {
            "hits": [
                {"index": "song", "type": "song", "result": {
                    "id": 1, "title": "Die For You (Remix)", "url": "https://genius.com/remix",
                    "primary_artist": {"name": "Cover Band"}, "lyrics_state": "complete"
                }},
                {"index": "song", "type": "song", "result": {
                    "id": 2, "title": "Die For You", "url": "https://genius.com/the-weeknd-die-for-you-lyrics",
                    "primary_artist": {"name": "The Weeknd"}, "lyrics_state": "complete"
                }},
                {"index": "song", "type": "song", "result": {
                    "id": 3, "title": "Unreleased Thing", "url": "https://genius.com/unreleased",
                    "primary_artist": {"name": "Someone"}, "lyrics_state": "unreleased"
                }}
            ]
        }
    }"#;

    fn hits() -> Vec<SongHit> {
        let envelope: SearchEnvelope = serde_json::from_str(SEARCH_RESPONSE).unwrap();
        envelope.response.hits.into_iter().map(|hit| hit.result).collect()
    }

    #[test]
    fn test_search_response_parses() {
        let hits = hits();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[1].artist_name(), "The Weeknd");
        assert!(hits[1].has_lyrics());
        assert!(!hits[2].has_lyrics());
    }

    #[test]
    fn test_select_prefers_artist_match() {
        let hits = hits();
        let request = LookupRequest::new("Die For You", Some("The Weeknd"));
        let best = select_best_hit(&hits, &request).unwrap();
        assert_eq!(best.url, "https://genius.com/the-weeknd-die-for-you-lyrics");
    }

    #[test]
    fn test_select_falls_back_to_first_hit() {
        let hits = hits();
        let request = LookupRequest::new("zzzz", None);
        let best = select_best_hit(&hits, &request).unwrap();
        assert_eq!(best.title, "Die For You (Remix)");
    }

    #[test]
    fn test_select_with_no_hits() {
        let request = LookupRequest::new("Die For You", None);
        assert!(select_best_hit(&[], &request).is_none());
    }

    #[test]
    fn test_extract_lyrics_from_containers() {
        let html = r#"
            <html><body>
              <div class="header">12 Contributors</div>
              <div data-lyrics-container="true">[Intro]<br>I'm findin' ways to <i>articulate</i><br>The feeling</div>
              <div data-lyrics-container="true"><div data-exclude-from-selection="true">You might also like</div>[Chorus]<br>I would die for you</div>
            </body></html>"#;

        let lyrics = extract_lyrics(html).unwrap();
        assert_eq!(
            lyrics,
            "[Intro]\nI'm findin' ways to articulate\nThe feeling\n[Chorus]\nI would die for you"
        );
        assert!(!lyrics.contains("You might also like"));
        assert!(!lyrics.contains("Contributors"));
    }

    #[test]
    fn test_extract_lyrics_decodes_entities() {
        let html = r#"<div data-lyrics-container="true">Rock &amp; roll<br>don&#x27;t stop</div>"#;
        assert_eq!(extract_lyrics(html).unwrap(), "Rock & roll\ndon't stop");
    }

    #[test]
    fn test_extract_lyrics_without_container() {
        assert_eq!(extract_lyrics("<html><body><p>Instrumental</p></body></html>"), None);
        assert_eq!(extract_lyrics(r#"<div data-lyrics-container="true">  </div>"#), None);
    }

    #[test]
    fn test_status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(check_status(StatusCode::UNAUTHORIZED), Err(NetworkError::Authentication)));
        assert!(matches!(check_status(StatusCode::TOO_MANY_REQUESTS), Err(NetworkError::RateLimit)));
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(NetworkError::Status { status }) if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn test_client_requires_token() {
        let settings = GeniusSettings {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: Some("   ".to_string()),
        };
        assert!(GeniusClient::new(&settings).is_err());
    }

    #[test]
    fn test_client_trims_api_url() {
        let settings = GeniusSettings {
            api_url: "https://api.genius.com/".to_string(),
            access_token: Some("token".to_string()),
        };
        let client = GeniusClient::new(&settings).unwrap();
        assert_eq!(client.api_url(), "https://api.genius.com");
    }
}
