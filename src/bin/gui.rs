use eframe::egui;
use textb64::{
    Config, Session, TextStats,
    config::{get_default_config_path, load_config, save_config},
    write_text_file,
};
use std::path::PathBuf;

/// テキスト⇔Base64 変換GUIアプリケーション
pub struct ConverterApp {
    session: Session,

    // 設定関連
    config: Config,
    /// 保存先ディレクトリ（空ならカレントディレクトリ）
    save_dir: String,

    // UI状態
    error_message: String,
    success_message: String,
    fonts_loaded: bool,
    current_tab: Tab,
}

#[derive(Clone, PartialEq)]
enum Tab {
    Converter,
    Settings,
    About,
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self {
            session: Session::new(),
            config: Config::default(),
            save_dir: String::new(),
            error_message: String::new(),
            success_message: String::new(),
            fonts_loaded: false,
            current_tab: Tab::Converter,
        }
    }
}

impl ConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        // 設定ファイルの読み込みを試行
        if let Ok(config) = load_config(None) {
            app.config = config;
        }
        app
    }

    /// 表示するエラーメッセージ（変換エラーはアプリ側の操作で消える）
    fn current_error(&self) -> &str {
        self.session.error().unwrap_or(self.error_message.as_str())
    }

    /// 処理結果をステータスバー用のメッセージに反映
    fn report(&mut self, result: Result<String, String>) {
        self.session.clear_error();
        match result {
            Ok(message) => {
                self.error_message.clear();
                self.success_message = message;
            }
            Err(e) => {
                self.error_message = e;
                self.success_message.clear();
            }
        }
    }

    fn encode(&mut self) {
        self.error_message.clear();
        self.success_message = match self.session.encode() {
            Ok(()) => "テキストをBase64にエンコードしました".to_string(),
            Err(_) => String::new(),
        };
    }

    fn decode(&mut self) {
        self.error_message.clear();
        self.success_message = match self.session.decode() {
            Ok(()) => "Base64をテキストにデコードしました".to_string(),
            Err(_) => String::new(),
        };
    }

    /// 出力をファイルに保存
    fn save_output(&self) -> Result<PathBuf, String> {
        let file_name = self
            .session
            .download_file_name(&self.config)
            .ok_or_else(|| "保存する内容がありません".to_string())?;

        let path = if self.save_dir.is_empty() {
            PathBuf::from(file_name)
        } else {
            PathBuf::from(&self.save_dir).join(file_name)
        };

        write_text_file(&path, &self.session.output).map_err(|e| format!("保存エラー: {e}"))?;
        Ok(path)
    }

    /// 設定の保存
    fn save_config(&self) -> Result<(), String> {
        let config_path =
            get_default_config_path().map_err(|e| format!("設定パス取得エラー: {e}"))?;

        save_config(&config_path, &self.config).map_err(|e| format!("設定保存エラー: {e}"))?;

        Ok(())
    }

    fn stats_row(ui: &mut egui::Ui, stats: TextStats) {
        ui.horizontal(|ui| {
            ui.label(format!("{} 文字", stats.character_count));
            ui.label(format!("{} バイト", stats.byte_count));
            ui.label(format!("{} 行", stats.line_count));
        });
    }

    /// 変換タブの描画
    fn draw_converter_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("🔄 テキスト⇔Base64 変換");
        ui.separator();

        // 入力テキスト
        ui.horizontal(|ui| {
            ui.label("入力:");
            if self.session.input_is_base64() {
                ui.colored_label(egui::Color32::GREEN, "✅ Base64を検出");
            }
        });
        ui.text_edit_multiline(&mut self.session.input);
        Self::stats_row(ui, self.session.input_stats());

        ui.add_space(10.0);

        // 処理ボタン
        ui.horizontal(|ui| {
            if ui.button("⬇ Base64にエンコード").clicked() {
                self.encode();
            }

            if ui.button("⬆ Base64をデコード").clicked() {
                self.decode();
            }

            if ui
                .add_enabled(self.session.can_swap(), egui::Button::new("⇄ 入れ替え"))
                .clicked()
            {
                self.session.swap();
                self.report(Ok("入力と出力を入れ替えました".to_string()));
            }

            if ui.button("🗑️ クリア").clicked() {
                self.session.clear();
                self.error_message.clear();
                self.success_message.clear();
            }
        });

        ui.add_space(10.0);

        // 出力テキスト
        ui.label("出力:");
        ui.text_edit_multiline(&mut self.session.output);
        Self::stats_row(ui, self.session.output_stats());

        ui.add_space(10.0);

        let has_output = !self.session.output.is_empty();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(has_output, egui::Button::new("📋 コピー"))
                .clicked()
            {
                ui.ctx().copy_text(self.session.output.clone());
                self.report(Ok("クリップボードにコピーしました".to_string()));
            }

            if ui
                .add_enabled(has_output, egui::Button::new("💾 ファイルに保存"))
                .clicked()
            {
                let result = self
                    .save_output()
                    .map(|path| format!("保存しました: {}", path.display()));
                self.report(result);
            }
        });
    }

    /// 設定タブの描画
    fn draw_settings_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("⚙️ 設定");
        ui.separator();

        ui.collapsing("📄 保存ファイル名", |ui| {
            ui.horizontal(|ui| {
                ui.label("エンコード結果:");
                ui.text_edit_singleline(&mut self.config.encoded_file_name);
            });
            ui.horizontal(|ui| {
                ui.label("デコード結果:");
                ui.text_edit_singleline(&mut self.config.decoded_file_name);
            });
            ui.horizontal(|ui| {
                ui.label("保存先ディレクトリ:");
                ui.text_edit_singleline(&mut self.save_dir);
            });
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("CLIの折り返し桁数 (0で無効):");
            ui.add(egui::DragValue::new(&mut self.config.wrap_width).range(0..=1024));
        });

        ui.checkbox(&mut self.config.default_verbose, "デフォルトで詳細出力");

        ui.add_space(20.0);

        // 設定ファイル操作
        ui.collapsing("💾 設定ファイル", |ui| {
            if let Ok(config_path) = get_default_config_path() {
                ui.label(format!("設定ファイル: {}", config_path.display()));
                ui.label(format!(
                    "存在: {}",
                    if config_path.exists() {
                        "はい"
                    } else {
                        "いいえ"
                    }
                ));

                ui.horizontal(|ui| {
                    if ui.button("💾 設定保存").clicked() {
                        let result = self
                            .save_config()
                            .map(|()| "設定を保存しました".to_string());
                        self.report(result);
                    }

                    if ui.button("📂 設定読込").clicked() {
                        let result = match load_config(None) {
                            Ok(config) => {
                                self.config = config;
                                Ok("設定を読み込みました".to_string())
                            }
                            Err(e) => Err(format!("設定読み込みエラー: {e}")),
                        };
                        self.report(result);
                    }

                    if ui.button("🔄 デフォルトにリセット").clicked() {
                        self.config = Config::default();
                        self.report(Ok("設定をリセットしました".to_string()));
                    }
                });
            } else {
                ui.label("設定ディレクトリが見つかりません");
            }
        });
    }

    /// Aboutタブの描画
    fn draw_about_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("ℹ️ このアプリについて");
        ui.separator();

        ui.label("テキスト⇔Base64 変換ツール GUI");
        ui.label(format!("バージョン: {}", env!("CARGO_PKG_VERSION")));
        ui.add_space(10.0);

        ui.label("🔤 UTF-8完全対応:");
        ui.label("• アクセント付き文字 (José)、記号 (€)、絵文字 (🚀) を正しく扱えます");
        ui.add_space(10.0);

        ui.label("🔍 自動検出:");
        ui.label("• 入力が有効なBase64なら「Base64を検出」と表示します");
        ui.add_space(10.0);

        ui.label("🎛️ 使い方:");
        ui.label("• APIに渡すデータのエンコード");
        ui.label("• トークンや設定値のデコード");
        ui.label("• 特殊文字を含むテキストの受け渡し");
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 日本語フォント設定
        if !self.fonts_loaded {
            let mut fonts = egui::FontDefinitions::default();

            if let Ok(font_data) =
                std::fs::read("/usr/share/fonts/vl-gothic-fonts/VL-Gothic-Regular.ttf")
            {
                fonts.font_data.insert(
                    "vl_gothic".to_owned(),
                    egui::FontData::from_owned(font_data).into(),
                );

                if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                    family.insert(0, "vl_gothic".to_owned());
                }

                ctx.set_fonts(fonts);
            }

            self.fonts_loaded = true;
        }

        // トップメニューバー
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("ファイル", |ui| {
                    if ui.button("新規").clicked() {
                        self.session.clear();
                        self.error_message.clear();
                        self.success_message.clear();
                    }
                    if ui.button("設定保存").clicked() {
                        let result = self
                            .save_config()
                            .map(|()| "設定を保存しました".to_string());
                        self.report(result);
                    }
                    ui.separator();
                    if ui.button("終了").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("ヘルプ", |ui| {
                    if ui.button("このアプリについて").clicked() {
                        self.current_tab = Tab::About;
                    }
                });
            });
        });

        // タブバー
        egui::TopBottomPanel::top("tab_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, Tab::Converter, "🔄 変換");
                ui.selectable_value(&mut self.current_tab, Tab::Settings, "⚙️ 設定");
                ui.selectable_value(&mut self.current_tab, Tab::About, "ℹ️ 情報");
            });
        });

        // ステータスバー
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let error = self.current_error();
                if !error.is_empty() {
                    ui.colored_label(egui::Color32::RED, format!("❌ {error}"));
                } else if !self.success_message.is_empty() {
                    ui.colored_label(egui::Color32::GREEN, format!("✅ {}", self.success_message));
                } else {
                    ui.label("準備完了");
                }
            });
        });

        // メインコンテンツ
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Converter => self.draw_converter_tab(ui),
            Tab::Settings => self.draw_settings_tab(ui),
            Tab::About => self.draw_about_tab(ui),
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("テキスト⇔Base64 変換ツール"),
        ..Default::default()
    };

    eframe::run_native(
        "Text Base64 Converter",
        options,
        Box::new(|cc| Ok(Box::new(ConverterApp::new(cc)))),
    )
}
