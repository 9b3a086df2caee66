//! Category registry: the 14 fixed content groupings and their display metadata.
//!
//! Pure static configuration. The template store never consults this table.

use crate::TemplateCategory;
use serde::Serialize;

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: TemplateCategory,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
    /// Icon (emoji).
    pub icon: &'static str,
    /// Color token used by the guide's theme.
    pub color: &'static str,
    /// Engagement signals this category is aimed at.
    pub target_engagement: &'static [&'static str],
}

static CATEGORIES: [CategoryInfo; 14] = [
    CategoryInfo {
        id: TemplateCategory::Engagement,
        name: "エンゲージメント誘発",
        description: "リプライやいいねなど、反応を引き出すことに特化した投稿",
        icon: "\u{1F4AC}",
        color: "blue",
        target_engagement: &["replies", "likes"],
    },
    CategoryInfo {
        id: TemplateCategory::Viral,
        name: "バイラル",
        description: "リポストで拡散されることを狙った投稿",
        icon: "\u{1F525}",
        color: "red",
        target_engagement: &["reposts", "likes"],
    },
    CategoryInfo {
        id: TemplateCategory::Value,
        name: "価値提供",
        description: "保存して後で見返したくなる実用的な情報",
        icon: "\u{1F48E}",
        color: "emerald",
        target_engagement: &["bookmarks", "likes"],
    },
    CategoryInfo {
        id: TemplateCategory::Storytelling,
        name: "ストーリー",
        description: "体験談や物語で滞在時間を伸ばす投稿",
        icon: "\u{1F4D6}",
        color: "amber",
        target_engagement: &["likes", "dwell_time"],
    },
    CategoryInfo {
        id: TemplateCategory::Question,
        name: "質問・問いかけ",
        description: "フォロワーに答えてもらう形式の投稿",
        icon: "\u{2753}",
        color: "sky",
        target_engagement: &["replies"],
    },
    CategoryInfo {
        id: TemplateCategory::Thread,
        name: "スレッド",
        description: "複数の投稿をつなげて深い内容を届ける形式",
        icon: "\u{1F9F5}",
        color: "indigo",
        target_engagement: &["bookmarks", "dwell_time", "follows"],
    },
    CategoryInfo {
        id: TemplateCategory::List,
        name: "リスト・まとめ",
        description: "要点を箇条書きで整理した投稿",
        icon: "\u{1F4CB}",
        color: "teal",
        target_engagement: &["bookmarks", "reposts"],
    },
    CategoryInfo {
        id: TemplateCategory::Opinion,
        name: "意見・主張",
        description: "自分の立場をはっきり示して議論を生む投稿",
        icon: "\u{1F4E2}",
        color: "orange",
        target_engagement: &["replies", "quotes"],
    },
    CategoryInfo {
        id: TemplateCategory::Humor,
        name: "ユーモア",
        description: "共感と笑いで気軽に反応してもらう投稿",
        icon: "\u{1F602}",
        color: "yellow",
        target_engagement: &["likes", "reposts"],
    },
    CategoryInfo {
        id: TemplateCategory::Personal,
        name: "自己開示",
        description: "人柄や舞台裏を見せて信頼を積み上げる投稿",
        icon: "\u{1F464}",
        color: "pink",
        target_engagement: &["likes", "follows"],
    },
    CategoryInfo {
        id: TemplateCategory::News,
        name: "ニュース・速報",
        description: "新しい情報をいち早く届ける投稿",
        icon: "\u{1F4F0}",
        color: "slate",
        target_engagement: &["reposts", "bookmarks"],
    },
    CategoryInfo {
        id: TemplateCategory::Tutorial,
        name: "ハウツー",
        description: "手順を順番に解説する投稿",
        icon: "\u{1F527}",
        color: "cyan",
        target_engagement: &["bookmarks", "likes"],
    },
    CategoryInfo {
        id: TemplateCategory::Promotion,
        name: "告知・宣伝",
        description: "商品やイベントを嫌味なく知らせる投稿",
        icon: "\u{1F4E3}",
        color: "violet",
        target_engagement: &["clicks", "reposts"],
    },
    CategoryInfo {
        id: TemplateCategory::Community,
        name: "コミュニティ",
        description: "フォロワー同士のつながりを生む投稿",
        icon: "\u{1F91D}",
        color: "lime",
        target_engagement: &["replies", "follows"],
    },
];

/// All categories in registry order.
pub fn all_categories() -> &'static [CategoryInfo] {
    &CATEGORIES
}

/// Look up a category by its string id.
pub fn get_category(id: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.id.as_str() == id)
}

pub(crate) fn info_for(category: TemplateCategory) -> &'static CategoryInfo {
    // CATEGORIES is laid out in the same order as TemplateCategory::ALL.
    &CATEGORIES[category as usize]
}
