//! Static seed data: the user directory, reference lists, and the initial
//! article snapshot.

use chrono::NaiveDate;
use faq_core::article::{ApprovalStamp, Article, ArticleKind, ArticleStatus, RejectionStamp};
use faq_core::reference::{ApprovalGroup, Category, DELETION_PROPOSAL_CATEGORY};
use faq_core::roles::Role;
use faq_core::types::Timestamp;
use faq_core::user::User;
use uuid::Uuid;

/// Password shared by every fixture account.
pub const FIXTURE_PASSWORD: &str = "password123";

pub const OPERATOR_ID: i64 = 1;
pub const SUPERVISOR_ID: i64 = 2;
pub const ADMIN_ID: i64 = 3;
pub const SECOND_OPERATOR_ID: i64 = 4;

fn at(rfc3339: &str) -> Timestamp {
    rfc3339.parse().expect("valid fixture timestamp")
}

fn date(iso: &str) -> NaiveDate {
    iso.parse().expect("valid fixture date")
}

fn user(id: i64, name: &str, email: &str, role: Role, group: &str) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        role,
        group: group.into(),
    }
}

/// Fixture accounts as `(user, password)` pairs.
pub fn accounts() -> Vec<(User, String)> {
    [
        user(OPERATOR_ID, "山田 太郎", "yamada@example.com", Role::Operator, "サポート1課"),
        user(SUPERVISOR_ID, "佐藤 花子", "sato@example.com", Role::Supervisor, "サポート1課"),
        user(ADMIN_ID, "鈴木 一郎", "suzuki@example.com", Role::Admin, "情報システム部"),
        user(SECOND_OPERATOR_ID, "田中 美咲", "tanaka@example.com", Role::Operator, "サポート2課"),
    ]
    .into_iter()
    .map(|u| (u, FIXTURE_PASSWORD.to_string()))
    .collect()
}

pub fn categories() -> Vec<Category> {
    [
        ("1", "システム", "#2563eb"),
        ("2", "アカウント", "#16a34a"),
        ("3", "ネットワーク", "#9333ea"),
        ("4", "ハードウェア", "#ea580c"),
        ("5", "業務手順", "#0891b2"),
        ("6", DELETION_PROPOSAL_CATEGORY, "#dc2626"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    })
    .collect()
}

pub fn approval_groups() -> Vec<ApprovalGroup> {
    [
        ("1", "システム管理", "システム・アカウント関連の記事を承認"),
        ("2", "ヘルプデスク", "ハードウェア・一般問い合わせの記事を承認"),
        ("3", "ナレッジ管理", "業務手順と削除提案を承認"),
    ]
    .into_iter()
    .map(|(id, name, description)| ApprovalGroup {
        id: id.into(),
        name: name.into(),
        description: description.into(),
    })
    .collect()
}

struct Seed {
    n: u128,
    number: &'static str,
    title: &'static str,
    category: &'static str,
    group: &'static str,
    keywords: &'static [&'static str],
    important: bool,
    question: &'static str,
    answer: &'static str,
    author: (i64, &'static str),
    created_at: &'static str,
}

impl Seed {
    fn into_article(self, status: ArticleStatus) -> Article {
        Article {
            id: Uuid::from_u128(self.n),
            article_number: self.number.into(),
            kind: ArticleKind::Standard,
            title: self.title.into(),
            category: self.category.into(),
            approval_group: self.group.into(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            is_important: self.important,
            public_start_date: date("2024-04-01"),
            public_end_date: date("2025-03-31"),
            question: self.question.into(),
            answer: self.answer.into(),
            additional_comment: None,
            notes: None,
            status,
            author_id: self.author.0,
            author_name: self.author.1.into(),
            created_at: at(self.created_at),
            approval: None,
            rejection: None,
        }
    }
}

fn approved(seed: Seed, approved_at: &str, comment: &str) -> Article {
    let mut article = seed.into_article(ArticleStatus::Approved);
    article.approval = Some(ApprovalStamp {
        approved_by: SUPERVISOR_ID,
        approved_at: at(approved_at),
        comment: comment.into(),
    });
    article
}

/// Initial article snapshot.
pub fn articles() -> Vec<Article> {
    let yamada = (OPERATOR_ID, "山田 太郎");
    let tanaka = (SECOND_OPERATOR_ID, "田中 美咲");

    let mut rejected = Seed {
        n: 6,
        number: "KBA-00006-10006",
        title: "共有フォルダのアクセス権申請",
        category: "業務手順",
        group: "ナレッジ管理",
        keywords: &["共有フォルダ", "アクセス権"],
        important: false,
        question: "共有フォルダへのアクセス権はどう申請しますか？",
        answer: "上長に連絡してください。",
        author: tanaka,
        created_at: "2024-05-20T10:00:00Z",
    }
    .into_article(ArticleStatus::Rejected);
    rejected.rejection = Some(RejectionStamp {
        reason: "申請フォームの場所と承認フローを追記してください".into(),
        rejected_at: at("2024-05-21T15:30:00Z"),
    });

    vec![
        approved(
            Seed {
                n: 1,
                number: "KBA-00001-10001",
                title: "パスワードを忘れた場合の再設定方法",
                category: "アカウント",
                group: "システム管理",
                keywords: &["パスワード", "リセット", "ログイン"],
                important: true,
                question: "ログインパスワードを忘れてしまいました。どうすればよいですか？",
                answer: "ログイン画面の「パスワードを忘れた方」から再設定メールを送信してください。",
                author: yamada,
                created_at: "2024-04-02T09:15:00Z",
            },
            "2024-04-03T11:00:00Z",
            "手順を確認しました",
        ),
        approved(
            Seed {
                n: 2,
                number: "KBA-00002-10002",
                title: "VPNに接続できない場合の対処",
                category: "ネットワーク",
                group: "システム管理",
                keywords: &["VPN", "リモート", "接続"],
                important: true,
                question: "自宅からVPNに接続できません。",
                answer: "クライアントを再起動し、証明書の有効期限を確認してください。",
                author: tanaka,
                created_at: "2024-04-10T13:40:00Z",
            },
            "2024-04-12T10:20:00Z",
            "",
        ),
        approved(
            Seed {
                n: 3,
                number: "KBA-00003-10003",
                title: "プリンタの印刷が遅い",
                category: "ハードウェア",
                group: "ヘルプデスク",
                keywords: &["プリンタ", "印刷"],
                important: false,
                question: "プリンタの印刷に時間がかかります。",
                answer: "印刷キューに残っているジョブを削除してから再度印刷してください。",
                author: yamada,
                created_at: "2024-04-15T08:05:00Z",
            },
            "2024-04-16T17:45:00Z",
            "",
        ),
        Seed {
            n: 4,
            number: "KBA-00004-10004",
            title: "経費精算システムの申請手順",
            category: "業務手順",
            group: "ナレッジ管理",
            keywords: &["経費", "精算"],
            important: false,
            question: "経費精算はどのように申請しますか？",
            answer: "経費精算システムにログインし、領収書の画像を添付して申請してください。",
            author: yamada,
            created_at: "2024-05-01T14:00:00Z",
        }
        .into_article(ArticleStatus::Pending),
        Seed {
            n: 5,
            number: "KBA-00005-10005",
            title: "メールボックスの容量上限について",
            category: "システム",
            group: "",
            keywords: &["メール", "容量"],
            important: false,
            question: "メールボックスの容量はどれくらいですか？",
            answer: "",
            author: yamada,
            created_at: "2024-05-10T16:20:00Z",
        }
        .into_article(ArticleStatus::Draft),
        rejected,
    ]
}
