use std::rc::Rc;

use eframe::egui;
use folio_glass_core::content::{SectionId, SiteContent};
use folio_glass_core::lifecycle::PageLifecycle;
use folio_glass_core::scroll::{SectionMap, SmoothScroll};
use folio_glass_core::tilt::{CardSlot, SurfaceHandle};
use folio_glass_core::views::page::layout_page;
use folio_glass_protocol::{Point, Rect as PageRect, ThemeToken};

use crate::renderer;
use crate::scene;
use crate::theme::ThemeMode;

/// Main application state.
pub struct FolioApp {
    content: SiteContent,
    /// Theme mode.
    theme_mode: ThemeMode,
    /// Eased page scroll driven by navbar clicks; wheel input overrides it.
    scroll: SmoothScroll,
    /// Section offsets from the last layout pass.
    sections: SectionMap,
    /// Tilt lifecycle; mounted over one slot per project card.
    lifecycle: PageLifecycle,
    slots: Vec<Rc<CardSlot>>,
    /// Error message to display.
    error: Option<String>,
    /// Pending content data from async load.
    pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Use dark theme by default
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>> =
            std::sync::Arc::new(std::sync::Mutex::new(None));

        // On WASM, check URL hash for hosted content (e.g. #content)
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(w) = web_sys::window() {
                let hash = w.location().hash().unwrap_or_default();
                if hash == "#content" {
                    let pd = pending_data.clone();
                    let ctx = cc.egui_ctx.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match Self::fetch_bytes("/assets/content.json").await {
                            Ok(resp) => {
                                if let Ok(mut lock) = pd.lock() {
                                    *lock = Some(resp);
                                }
                                ctx.request_repaint();
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("folio.glass: fetch error: {e}").into(),
                                );
                            }
                        }
                    });
                }
            }
        }

        Self {
            content: SiteContent::default_content(),
            theme_mode: ThemeMode::Dark,
            scroll: SmoothScroll::new(),
            sections: SectionMap::default(),
            lifecycle: PageLifecycle::new(),
            slots: Vec::new(),
            error: None,
            pending_data,
        }
    }

    fn load_content(&mut self, data: &[u8]) {
        match SiteContent::from_json(data) {
            Ok(content) => {
                self.content = content;
                // Force a remount over the new card set.
                self.slots.clear();
                self.scroll.set_immediate(0.0);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to load content: {e}"));
            }
        }
    }

    /// One slot per project card; remounts whenever the card set changes.
    fn ensure_mounted(&mut self) {
        if self.lifecycle.is_mounted() && self.slots.len() == self.content.projects.len() {
            return;
        }
        self.slots = (0..self.content.projects.len())
            .map(|_| CardSlot::new())
            .collect();
        self.lifecycle.mount(
            self.slots
                .iter()
                .map(|s| s.clone() as Rc<dyn SurfaceHandle>)
                .collect(),
        );
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| format!("{e:?}"))?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "not a Response")?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        let buf = JsFuture::from(resp.array_buffer().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let uint8 = js_sys::Uint8Array::new(&buf);
        Ok(uint8.to_vec())
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for async-loaded content
        let pending = {
            let mut lock = self.pending_data.lock().unwrap_or_else(|e| e.into_inner());
            lock.take()
        };
        if let Some(data) = pending {
            self.load_content(&data);
        }

        self.ensure_mounted();

        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.scroll.tick(dt);
        if self.scroll.is_animating() {
            ctx.request_repaint();
        }

        // Navbar
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new(self.content.brand.as_str())
                        .color(crate::theme::resolve(ThemeToken::BrandAccent, self.theme_mode)),
                );
                ui.separator();

                for section in SectionId::ALL {
                    if section == SectionId::Home {
                        continue;
                    }
                    if ui.button(section.label()).clicked() {
                        self.scroll.scroll_to_section(&self.sections, section);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme_mode {
                        ThemeMode::Dark => "Dark",
                        ThemeMode::Light => "Light",
                    };
                    if ui.button(theme_label).clicked() {
                        self.theme_mode = match self.theme_mode {
                            ThemeMode::Dark => {
                                ctx.set_visuals(egui::Visuals::light());
                                ThemeMode::Light
                            }
                            ThemeMode::Light => {
                                ctx.set_visuals(egui::Visuals::dark());
                                ThemeMode::Dark
                            }
                        };
                    }

                    if ui.button("Let's talk").clicked() {
                        self.scroll
                            .scroll_to_section(&self.sections, SectionId::Contact);
                    }

                    #[cfg(not(target_arch = "wasm32"))]
                    if ui.button("Open content").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Content", &["json"])
                            .pick_file()
                        {
                            match std::fs::read(&path) {
                                Ok(data) => self.load_content(&data),
                                Err(e) => {
                                    self.error = Some(format!("Failed to read file: {e}"));
                                }
                            }
                        }
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                } else {
                    ui.label(self.content.footer.as_str());
                }
            });
        });

        // Central panel: the scrollable page
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            ui.allocate_rect(available, egui::Sense::hover());

            // Wheel and trackpad scrolling takes over from any animation.
            let wheel = ui.input(|i| i.smooth_scroll_delta);
            if wheel.y.abs() > 0.1 {
                self.scroll
                    .set_immediate(self.scroll.offset() - wheel.y as f64);
            }
            ui.input(|i| {
                if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::PageDown) {
                    self.scroll.scroll_to(self.scroll.offset() + 320.0);
                }
                if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::PageUp) {
                    self.scroll.scroll_to(self.scroll.offset() - 320.0);
                }
                if i.key_pressed(egui::Key::Home) {
                    self.scroll.scroll_to(0.0);
                }
            });

            let orientations: Vec<_> = self.slots.iter().map(|s| s.orientation()).collect();
            let page = layout_page(&self.content, available.width() as f64, &orientations);
            self.sections = page.sections.clone();

            let max_scroll = (page.height - available.height() as f64).max(0.0);
            if self.scroll.offset() > max_scroll {
                self.scroll.set_immediate(max_scroll);
            }

            let mut painter = ui.painter_at(available);
            painter.rect_filled(
                available,
                egui::CornerRadius::ZERO,
                crate::theme::resolve(ThemeToken::Background, self.theme_mode),
            );
            // Ambient glows behind the glass surfaces.
            let glow_h = available.height() * 0.5;
            painter.rect_filled(
                egui::Rect::from_min_size(
                    available.left_top(),
                    egui::vec2(available.width(), glow_h),
                ),
                egui::CornerRadius::ZERO,
                crate::theme::resolve(ThemeToken::BackdropGlowTop, self.theme_mode),
            );
            painter.rect_filled(
                egui::Rect::from_min_size(
                    egui::pos2(available.left(), available.bottom() - glow_h),
                    egui::vec2(available.width(), glow_h),
                ),
                egui::CornerRadius::ZERO,
                crate::theme::resolve(ThemeToken::BackdropGlowBottom, self.theme_mode),
            );

            let origin = egui::pos2(
                available.left(),
                available.top() - self.scroll.offset() as f32,
            );
            let result =
                renderer::render_commands(&mut painter, &page.commands, origin, self.theme_mode);

            // Substitute the live scene into the hero's slot.
            let scene_screen = egui::Rect::from_min_size(
                egui::pos2(
                    origin.x + page.scene_rect.x as f32,
                    origin.y + page.scene_rect.y as f32,
                ),
                egui::vec2(page.scene_rect.w as f32, page.scene_rect.h as f32),
            );
            if scene_screen.intersects(available) {
                scene::paint_scene(
                    &painter,
                    scene_screen,
                    ui.input(|i| i.time),
                    self.theme_mode,
                    &self.content.hero.scene_url,
                );
                ctx.request_repaint();
            }

            // Feed the laid-out card rects back to the tilt surfaces and
            // deliver this frame's pointer sample.
            for hit in &result.hit_regions {
                if let Some(slot) = self.slots.get(hit.card_id as usize) {
                    slot.set_rect(Some(PageRect::new(
                        hit.rect.left() as f64,
                        hit.rect.top() as f64,
                        hit.rect.width() as f64,
                        hit.rect.height() as f64,
                    )));
                }
            }
            let pointer = ui
                .input(|i| i.pointer.hover_pos())
                .filter(|p| available.contains(*p))
                .map(|p| Point::new(p.x as f64, p.y as f64));
            if let Some(registration) = self.lifecycle.registration_mut() {
                registration.track(pointer);
            }
        });

        // Handle content file drop
        ctx.input(|i| {
            if let Some(file) = i.raw.dropped_files.first() {
                if let Some(bytes) = &file.bytes {
                    let data: Vec<u8> = bytes.to_vec();
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(egui::Id::new("pending_content"), data);
                    });
                }
            }
        });
        let pending: Option<Vec<u8>> = ctx.memory_mut(|mem| {
            mem.data
                .get_temp::<Vec<u8>>(egui::Id::new("pending_content"))
        });
        if let Some(data) = pending {
            ctx.memory_mut(|mem| {
                mem.data.remove::<Vec<u8>>(egui::Id::new("pending_content"));
            });
            self.load_content(&data);
        }
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        // Symmetric teardown: releases every tilt binding and resets any
        // still-tilted card.
        self.lifecycle.unmount();
    }
}
