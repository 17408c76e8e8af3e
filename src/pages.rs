//! The three fixed page builders.
//!
//! Each builder performs one literal drawing sequence; all coordinates,
//! strings, sizes, and colors are constants of the summary layout. The
//! builders never fail and have no effect beyond the canvas they receive.

use crate::canvas::{palette, BoxStyle, PageCanvas};

/// Page 1: purpose, key facts, and the actor flow of the system.
pub fn overview(page: &mut PageCanvas) {
    page.rounded_box(
        0.08,
        0.83,
        0.84,
        0.12,
        "シフト集約システム 統合サマリー",
        "要件定義 + ER図 + API一覧",
        BoxStyle::filled(palette::HEADER_FILL),
    );
    page.label(
        0.10,
        0.78,
        "目的: 社員の月次希望を1回で回収し、社長のGoogleスプレッドシートへ自動同期",
        10.0,
        palette::NOTE,
    );

    let facts = [
        (0.08, "入力回数", "1社員×1月=1回"),
        (0.375, "認証", "Google OAuth"),
        (0.67, "連携", "Google Sheets"),
    ];
    for (x, title, body) in facts {
        page.rounded_box(x, 0.65, 0.25, 0.10, title, body, BoxStyle::filled(palette::PANEL_FILL));
    }

    page.rounded_box(0.08, 0.46, 0.20, 0.10, "社員", "希望入力", BoxStyle::default());
    page.rounded_box(0.40, 0.43, 0.20, 0.16, "システム", "保存・重複防止・同期", BoxStyle::default());
    page.rounded_box(0.72, 0.46, 0.20, 0.10, "管理者", "集約確認", BoxStyle::default());
    page.arrow(0.28, 0.51, 0.40, 0.51);
    page.arrow(0.60, 0.51, 0.72, 0.51);

    page.label(0.08, 0.35, "主要機能", 13.0, palette::HEADING);
    let bullets = [
        "1. 社員向け: 対象月のシフト希望提出（プルダウン選択）",
        "2. 管理者向け: 月次集約、未提出確認、社員マスタ管理",
        "3. システム: 認証、DB保存、スプレッドシート同期、監査ログ",
    ];
    let mut y = 0.31;
    for bullet in bullets {
        page.label(0.10, y, bullet, 10.0, palette::INK);
        y -= 0.04;
    }

    page.footer("1 / 3");
}

/// Page 2: the screen-flow diagram and the entity-relationship sketch.
pub fn screens_and_entities(page: &mut PageCanvas) {
    page.label(0.08, 0.94, "画面遷移とER図", 18.0, palette::HEADING);

    let steps = [
        "S01\nログイン",
        "S03\n月選択/入力",
        "S03\n日別希望",
        "S04\n提出完了",
        "S05\n提出済み",
    ];
    let mut x = 0.08;
    for (index, step) in steps.iter().enumerate() {
        page.rounded_box(x, 0.80, 0.15, 0.09, step, "", BoxStyle::filled(palette::STEP_FILL));
        if index < steps.len() - 1 {
            page.arrow(x + 0.15, 0.845, x + 0.18, 0.845);
        }
        x += 0.18;
    }
    page.label(
        0.08,
        0.75,
        "管理者導線: A01ダッシュボード → A02集約一覧 / A03未提出 / A04社員マスタ / A05同期履歴",
        9.5,
        palette::CAPTION,
    );

    page.label(0.08, 0.69, "ERサマリー", 13.0, palette::HEADING);
    page.rounded_box(0.08, 0.56, 0.18, 0.08, "users", "Google主体", BoxStyle::default());
    page.rounded_box(0.30, 0.56, 0.18, 0.08, "employees", "社員マスタ", BoxStyle::default());
    page.rounded_box(0.52, 0.56, 0.18, 0.08, "shift_months", "対象月", BoxStyle::default());

    page.rounded_box(
        0.25,
        0.40,
        0.36,
        0.10,
        "shift_submissions",
        "UNIQUE(employee_id, shift_month_id)",
        BoxStyle::new(palette::ACCENT_FILL, palette::ACCENT_EDGE),
    );
    page.rounded_box(0.25, 0.26, 0.23, 0.08, "shift_submission_details", "日別希望", BoxStyle::default());
    page.rounded_box(0.53, 0.26, 0.22, 0.08, "sync_jobs/items", "同期履歴", BoxStyle::default());
    page.rounded_box(0.08, 0.26, 0.14, 0.08, "audit_logs", "操作証跡", BoxStyle::default());

    page.arrow(0.17, 0.56, 0.33, 0.50);
    page.arrow(0.39, 0.56, 0.43, 0.50);
    page.arrow(0.61, 0.56, 0.54, 0.50);
    page.arrow(0.43, 0.40, 0.36, 0.34);
    page.arrow(0.55, 0.40, 0.62, 0.34);
    page.arrow(0.30, 0.40, 0.17, 0.34);

    let rows = [
        ("users", "google_sub, email を一意管理"),
        ("employees", "在籍・無効化を管理（論理削除）"),
        ("shift_submissions", "同一社員・同一月の重複提出をDBで防止"),
        ("sync_jobs", "自動/手動/再試行の実行結果を記録"),
    ];
    let mut y = 0.18;
    for (name, desc) in rows {
        page.label(0.08, y, &format!("- {name}: {desc}"), 9.5, palette::INK);
        y -= 0.03;
    }

    page.footer("2 / 3");
}

/// Page 3: grouped API endpoints, the integration flow, and acceptance checks.
pub fn apis_and_integration(page: &mut PageCanvas) {
    page.label(0.08, 0.94, "API一覧と連携イメージ", 18.0, palette::HEADING);

    let groups = [
        ("認証", "GET /auth/google\nGET /auth/google/callback\nGET /me"),
        (
            "社員提出",
            "GET /shift-months/open\nGET /employees/active\nPOST /shift-submissions",
        ),
        (
            "管理者",
            "GET /admin/shift-submissions/:yearMonth\nGET /admin/unsubmitted/:yearMonth\nPATCH /admin/shift-submissions/:id",
        ),
        (
            "同期・監査",
            "POST /admin/sync-jobs\nPOST /admin/sync-jobs/:id/retry\nGET /admin/audit-logs",
        ),
    ];
    let mut y = 0.84;
    for (title, endpoints) in groups {
        page.rounded_box(0.08, y - 0.08, 0.46, 0.11, title, endpoints, BoxStyle::filled(palette::PANEL_FILL));
        y -= 0.14;
    }

    let flow = [
        ("社員UI", "提出API", false),
        ("アプリAPI", "検証/保存/同期起動", true),
        ("DB", "提出・監査ログ", false),
        ("Google Sheets", "自動同期", false),
        ("管理者UI", "集約確認", false),
    ];
    let mut y = 0.76;
    for (title, body, accent) in flow {
        let style = if accent {
            BoxStyle::new(palette::ACCENT_FILL, palette::ACCENT_EDGE)
        } else {
            BoxStyle::default()
        };
        page.rounded_box(0.62, y, 0.22, 0.08, title, body, style);
        y -= 0.14;
    }
    for step in 0..4 {
        let top = 0.76 - 0.14 * step as f64;
        page.arrow(0.73, top, 0.73, top - 0.06);
    }

    page.label(0.08, 0.17, "受け入れ判定の要点", 13.0, palette::HEADING);
    let checks = [
        "1. 同一社員・同一月の2回目提出は 409 を返す",
        "2. 社員プルダウンは employees マスタから生成される",
        "3. 提出後に管理者スプレッドシートへ同期される",
        "4. 未提出一覧と同期失敗履歴を管理者が確認できる",
    ];
    let mut y = 0.13;
    for check in checks {
        page.label(0.10, y, check, 9.8, palette::INK);
        y -= 0.03;
    }

    page.footer("3 / 3");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{PageStats, PAGE_HEIGHT, PAGE_WIDTH};
    use printpdf::{BuiltinFont, PdfDocument};

    fn stats_for(build: fn(&mut PageCanvas)) -> PageStats {
        let (document, page, layer) = PdfDocument::new("test", PAGE_WIDTH, PAGE_HEIGHT, "Page 1");
        let font = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .expect("builtin font");
        let mut canvas = PageCanvas::new(document.get_page(page).get_layer(layer), font);
        build(&mut canvas);
        canvas.finish()
    }

    #[test]
    fn overview_names_the_three_actors() {
        let stats = stats_for(overview);
        for actor in ["社員", "システム", "管理者"] {
            assert!(stats.has_label(actor), "missing actor {actor}");
        }
        assert!(stats.has_label("1 / 3"));
    }

    #[test]
    fn entity_sketch_names_every_table() {
        let stats = stats_for(screens_and_entities);
        let tables = [
            "users",
            "employees",
            "shift_months",
            "shift_submissions",
            "shift_submission_details",
            "sync_jobs",
            "audit_logs",
        ];
        for table in tables {
            assert!(stats.has_label(table), "missing entity {table}");
        }
        assert!(stats.has_label("2 / 3"));
    }

    #[test]
    fn api_listing_covers_all_groups() {
        let stats = stats_for(apis_and_integration);
        for group in ["認証", "社員提出", "管理者", "同期・監査"] {
            assert!(stats.has_label(group), "missing group {group}");
        }
        assert!(stats.has_label("POST /shift-submissions"));
        assert!(stats.has_label("3 / 3"));
    }
}
