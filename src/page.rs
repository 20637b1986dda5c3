//! Classification of music catalogue page URLs.

const HOSTS: &[&str] = &[
    "music.yandex.ru",
    "music.yandex.ua",
    "music.yandex.kz",
    "music.yandex.by",
];

/// Host on which the toolbar page action is shown. The other catalogue
/// hosts are classified but keep the action hidden.
const ICON_HOST: &str = "music.yandex.ru";

/// True if the toolbar page action should be visible for `url`
/// (`http` or `https`, scheme case-insensitive).
pub fn is_icon_host(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    rest.is_some_and(|r| r.starts_with(ICON_HOST))
}

/// Icon for the page at `url`, or `None` when the page action is hidden.
pub fn page_action_icon(url: &str) -> Option<&'static str> {
    if !is_icon_host(url) {
        return None;
    }
    let page = PageInfo::classify(url).map_or(Page::Other, |info| info.page);
    Some(page.icon())
}

/// What a catalogue page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Playlist { username: String, playlist_id: String },
    Track { album_id: String, track_id: String },
    Album { album_id: String },
    Artist { artist_id: String },
    Label { label_id: String },
    Other,
}

impl Page {
    /// Toolbar icon for this kind of page. Only shown on `music.yandex.ru`,
    /// see [`page_action_icon`].
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Playlist { .. } => "img/green.png",
            Page::Track { .. } => "img/blue.png",
            Page::Album { .. } => "img/yellow.png",
            Page::Artist { .. } | Page::Label { .. } => "img/pink.png",
            Page::Other => "img/black.png",
        }
    }

    /// True for pages that offer something to download.
    pub fn is_downloadable(&self) -> bool {
        !matches!(self, Page::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Country suffix of the catalogue host (`ru`, `ua`, ...).
    pub domain: String,
    pub page: Page,
}

impl PageInfo {
    /// Returns `None` for URLs outside the catalogue.
    pub fn classify(url: &str) -> Option<PageInfo> {
        let url = url.split('?').next().unwrap_or(url);
        let parts: Vec<&str> = url.split('/').collect();
        let part = |i: usize| parts.get(i).copied().unwrap_or("");

        let host = part(2);
        if !HOSTS.contains(&host) {
            return None;
        }
        let domain = host.rsplit('.').next().unwrap_or_default().to_string();

        let page = match (part(3), part(4), part(5), part(6)) {
            ("users", user, "playlists", id) if !id.is_empty() => Page::Playlist {
                username: user.to_string(),
                playlist_id: id.to_string(),
            },
            ("album", album, "track", id) if !id.is_empty() => Page::Track {
                album_id: album.to_string(),
                track_id: id.to_string(),
            },
            ("album", id, _, _) if !id.is_empty() => Page::Album {
                album_id: id.to_string(),
            },
            ("artist", id, _, _) if !id.is_empty() => Page::Artist {
                artist_id: id.to_string(),
            },
            ("label", id, _, _) if !id.is_empty() => Page::Label {
                label_id: id.to_string(),
            },
            _ => Page::Other,
        };

        Some(PageInfo { domain, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Page {
        PageInfo::classify(url).expect("catalogue url").page
    }

    #[test]
    fn ignores_foreign_hosts() {
        assert_eq!(PageInfo::classify("https://example.com/album/1"), None);
        assert_eq!(PageInfo::classify("not a url"), None);
    }

    #[test]
    fn classifies_pages() {
        assert_eq!(
            page("https://music.yandex.ru/users/furfurmusic/playlists/1000"),
            Page::Playlist {
                username: "furfurmusic".into(),
                playlist_id: "1000".into()
            }
        );
        assert_eq!(
            page("https://music.yandex.ru/album/718010/track/6570232?from=search"),
            Page::Track {
                album_id: "718010".into(),
                track_id: "6570232".into()
            }
        );
        assert_eq!(
            page("https://music.yandex.ru/album/2289231"),
            Page::Album { album_id: "2289231".into() }
        );
        assert_eq!(
            page("https://music.yandex.ru/artist/36800/tracks"),
            Page::Artist { artist_id: "36800".into() }
        );
        assert_eq!(page("https://music.yandex.ru/label/777"), Page::Label { label_id: "777".into() });
        assert_eq!(page("https://music.yandex.ru/"), Page::Other);
        assert_eq!(page("https://music.yandex.ru/users/x/playlists/"), Page::Other);
    }

    #[test]
    fn reports_domain_suffix() {
        let info = PageInfo::classify("https://music.yandex.kz/album/1").unwrap();
        assert_eq!(info.domain, "kz");
    }

    #[test]
    fn icons() {
        assert_eq!(page("https://music.yandex.ru/album/1/track/2").icon(), "img/blue.png");
        assert_eq!(page("https://music.yandex.ru/label/3").icon(), "img/pink.png");
        assert_eq!(Page::Other.icon(), "img/black.png");
        assert!(!Page::Other.is_downloadable());
    }

    #[test]
    fn page_action_only_on_ru_host() {
        assert!(is_icon_host("https://music.yandex.ru/album/1"));
        assert!(is_icon_host("HTTP://Music.Yandex.RU/"));
        assert!(!is_icon_host("https://music.yandex.ua/album/1"));
        assert!(!is_icon_host("ftp://music.yandex.ru/"));
        assert!(!is_icon_host("https://example.com/?q=music.yandex.ru"));

        assert_eq!(
            page_action_icon("https://music.yandex.ru/users/u/playlists/5"),
            Some("img/green.png")
        );
        assert_eq!(page_action_icon("https://music.yandex.ru/"), Some("img/black.png"));
        assert_eq!(page_action_icon("https://music.yandex.kz/album/1"), None);
        assert_eq!(page_action_icon("https://example.com/album/1"), None);
    }
}
