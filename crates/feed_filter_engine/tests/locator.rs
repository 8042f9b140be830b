use feed_filter_engine::{is_restricted, locate_label, LocatedLabel};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};

fn locate(html: &str) -> Option<LocatedLabel> {
    let doc = Html::parse_fragment(html);
    let selector = Selector::parse("[data-card]").unwrap();
    let card = doc.select(&selector).next().expect("fixture has a card");
    locate_label(card)
}

fn restricted(html: &str) -> bool {
    let doc = Html::parse_fragment(html);
    let selector = Selector::parse("[data-card]").unwrap();
    let card = doc.select(&selector).next().expect("fixture has a card");
    is_restricted(card)
}

fn found(text: &str, strategy: &'static str) -> Option<LocatedLabel> {
    Some(LocatedLabel {
        text: text.to_string(),
        strategy,
    })
}

#[test]
fn classic_block_wins_over_later_strategies() {
    let html = r#"
        <div data-card>
            <a aria-label="Clip by Someone 5 views" href="/watch?v=1">Clip</a>
            <span class="inline-metadata-item style-scope ytd-video-meta-block">
                1,234
                views
            </span>
            <span class="inline-metadata-item style-scope ytd-video-meta-block">2 days ago</span>
        </div>"#;
    assert_eq!(locate(html), found("1,234 views", "classic_meta"));
}

#[test]
fn classic_block_accepts_labels_without_view_word() {
    let html = r#"<div data-card><span class="inline-metadata-item style-scope ytd-video-meta-block">1.234 Aufrufe</span></div>"#;
    assert_eq!(locate(html), found("1.234 Aufrufe", "classic_meta"));
}

#[test]
fn scheduled_date_in_classic_block_falls_through() {
    let html = r#"
        <div data-card>
            <span class="inline-metadata-item style-scope ytd-video-meta-block">Scheduled for 5/1/25</span>
            <span class="yt-content-metadata-view-model-wiz__metadata-text">12 waiting</span>
        </div>"#;
    assert_eq!(locate(html), None);
}

#[test]
fn content_metadata_row_mentioning_views_is_picked() {
    let html = r#"
        <div data-card>
            <div class="yt-content-metadata-view-model-wiz__metadata-text">Some Channel 2</div>
            <span class="yt-content-metadata-view-model-wiz__metadata-text">1.2K views</span>
            <span class="yt-content-metadata-view-model-wiz__metadata-text">3 days ago</span>
        </div>"#;
    assert_eq!(locate(html), found("1.2K views", "content_metadata"));
}

#[test]
fn unprefixed_content_metadata_class_is_recognised() {
    let html = r#"<div data-card><span class="yt-content-metadata-view-model__metadata-text">3 lakh views</span></div>"#;
    assert_eq!(locate(html), found("3 lakh views", "content_metadata"));
}

#[test]
fn small_leaf_text_is_scanned() {
    let html = r#"
        <div data-card>
            <div><span>Top 10 clips</span><span>987 views</span></div>
        </div>"#;
    assert_eq!(locate(html), found("987 views", "leaf_text"));
}

#[test]
fn long_leaf_text_is_ignored() {
    let description = format!("{} with 5 views mentioned somewhere", "very long description ".repeat(5));
    let html = format!(r#"<div data-card><p>{description}</p></div>"#);
    assert_eq!(locate(&html), None);
}

#[test]
fn accessible_label_is_last_resort() {
    let html = r#"
        <div data-card>
            <a aria-label="Top 10 crates of 2024 by Rustacean 3,456 views 2 days ago" href="/watch?v=2">
                <img src="thumb.jpg">
            </a>
        </div>"#;
    assert_eq!(locate(html), found("3,456 views", "link_aria_label"));
}

#[test]
fn no_strategy_matches_status_words() {
    let html = r#"<div data-card><span>Live</span><span>Premieres soon</span></div>"#;
    assert_eq!(locate(html), None);
}

#[test]
fn empty_card_has_no_label() {
    assert_eq!(locate(r#"<div data-card></div>"#), None);
}

#[test]
fn members_only_badge_or_text_restricts() {
    assert!(restricted(
        r#"<div data-card><div class="badge badge-style-type-members-only"></div></div>"#
    ));
    assert!(restricted(
        r#"<div data-card><span>Members only</span><span>10K views</span></div>"#
    ));
    assert!(!restricted(
        r#"<div data-card><span>Members</span><span>10K views</span></div>"#
    ));
}

#[test]
fn titles_with_view_lookalike_words_are_skipped() {
    let html = r#"
        <div data-card>
            <div><span>Top 10 reviews of 2024</span><span>5K views</span></div>
        </div>"#;
    assert_eq!(locate(html), found("5K views", "leaf_text"));

    let html = r#"<div data-card><span>My 3 interviews</span><span>2.3K views</span></div>"#;
    assert_eq!(locate(html), found("2.3K views", "leaf_text"));
}
