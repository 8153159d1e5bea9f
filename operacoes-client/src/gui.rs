//! eframe front end for [`CalculatorForm`].

use eframe::egui::{self, RichText};
use operacoes_core::Operator;
use tokio::runtime::Runtime;

use crate::client::OperationClient;
use crate::form::CalculatorForm;

pub const WINDOW_TITLE: &str = "Calculadora com API";

pub struct CalculatorApp {
    form: CalculatorForm,
    client: OperationClient,
    runtime: Runtime,
}

impl CalculatorApp {
    pub fn new(client: OperationClient, runtime: Runtime) -> Self {
        Self {
            form: CalculatorForm::default(),
            client,
            runtime,
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.form.alert.clone() else {
            return;
        };

        egui::Window::new("Erro")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.separator();
                if ui.button("OK").clicked() {
                    self.form.dismiss_alert();
                }
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.form.alert.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label("Número 1:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.numero1).desired_width(160.0));

                    ui.add_space(5.0);
                    ui.label("Número 2:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.numero2).desired_width(160.0));

                    ui.add_space(5.0);
                    ui.label("Selecione a operação:");
                    egui::ComboBox::from_id_salt("operacao")
                        .selected_text(self.form.operator.route())
                        .show_ui(ui, |ui| {
                            for op in Operator::ALL {
                                ui.selectable_value(&mut self.form.operator, op, op.route());
                            }
                        });

                    ui.add_space(10.0);
                    if ui.button("Calcular").clicked() {
                        // One synchronous round trip; the window waits for it.
                        self.runtime.block_on(self.form.calculate(&self.client));
                    }

                    ui.add_space(20.0);
                    ui.label(RichText::new(&self.form.result_label).size(18.0));
                });
            });
        });

        self.render_alert(ctx);
    }
}
