use eframe::egui::{
    Button, CentralPanel, ComboBox, Context, RichText, ScrollArea, TextEdit, Ui, vec2,
};

use crate::{
    app::{FieldInputs, nudge_steps},
    config::FORM,
    domain::FormField,
    engine::PredictionFormController,
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{UiStyleExt, colored_subsection_heading},
        ui_panels::render_result_card,
        ui_text::ICON_WARNING,
    },
    utils::month_name,
};

pub(crate) fn render_form(
    ctx: &Context,
    controller: &mut PredictionFormController,
    inputs: &mut FieldInputs,
) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.form_max_width);
                    ui.add_space(24.0);
                    render_header(ui);
                    ui.add_space(20.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.vertical(|ui| {
                            render_presets(ui, controller, inputs);
                            ui.add_space(14.0);
                            render_inputs(ui, controller, inputs);
                            ui.add_space(18.0);
                            render_submit(ui, controller);
                            render_banners(ui, controller);
                        });
                    });

                    if let Some(result) = controller.result() {
                        ui.add_space(20.0);
                        render_result_card(ui, result);
                    }

                    ui.add_space(24.0);
                    render_features(ui);
                    ui.add_space(24.0);
                });
            });
    });
}

fn render_header(ui: &mut Ui) {
    ui.label(
        RichText::new(&UI_TEXT.title)
            .size(34.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.label(RichText::new(&UI_TEXT.subtitle).size(30.0).strong());
    ui.add_space(6.0);
    ui.label_subdued(UI_TEXT.tagline.as_str());
}

fn render_presets(
    ui: &mut Ui,
    controller: &mut PredictionFormController,
    inputs: &mut FieldInputs,
) {
    ui.horizontal(|ui| {
        for year in FORM.preset_years {
            let button = Button::new(RichText::new(year.to_string()).strong())
                .min_size(vec2(64.0, 26.0));
            if ui.add(button).clicked() {
                controller.apply_preset(*year);
                inputs.sync_from(controller.form());
            }
        }
    });
    ui.label_subdued(UI_TEXT.hint_presets.as_str());
}

fn render_inputs(
    ui: &mut Ui,
    controller: &mut PredictionFormController,
    inputs: &mut FieldInputs,
) {
    ui.columns(4, |cols| {
        text_field(
            &mut cols[0],
            FormField::Year,
            &UI_TEXT.label_year,
            &UI_TEXT.hint_year,
            controller,
            inputs,
        );
        month_field(&mut cols[1], controller, inputs);
        text_field(
            &mut cols[2],
            FormField::Day,
            &UI_TEXT.label_day,
            &UI_TEXT.hint_day,
            controller,
            inputs,
        );
        text_field(
            &mut cols[3],
            FormField::InflationRate,
            &UI_TEXT.label_inflation,
            &UI_TEXT.hint_inflation,
            controller,
            inputs,
        );
    });
}

fn text_field(
    ui: &mut Ui,
    field: FormField,
    label: &str,
    hint: &str,
    controller: &mut PredictionFormController,
    inputs: &mut FieldInputs,
) {
    ui.label_field(label);
    let Some(buffer) = inputs.buffer_mut(field) else {
        return;
    };
    let response = ui.add(
        TextEdit::singleline(buffer)
            .desired_width(f32::INFINITY)
            .hint_text(hint),
    );
    if response.changed() {
        let outcome = controller.set_field(field, buffer);
        inputs.record(field, outcome);
    }
    if field == FormField::InflationRate && response.has_focus() {
        nudge_inflation(ui, controller, inputs);
    }

    if inputs.rejected.contains_key(&field) {
        ui.label(
            RichText::new(&UI_TEXT.hint_not_a_number)
                .small()
                .color(UI_CONFIG.colors.error_text),
        );
    } else {
        ui.label_subdued(hint);
    }
}

/// Up/Down step the inflation rate while its field has focus.
fn nudge_inflation(ui: &Ui, controller: &mut PredictionFormController, inputs: &mut FieldInputs) {
    let steps = ui.input(|i| nudge_steps(|key| i.key_pressed(key)));
    if steps == 0 {
        return;
    }
    controller.nudge_inflation(steps);
    inputs.inflation = controller.form().field_text(FormField::InflationRate);
    inputs.record(FormField::InflationRate, Ok(()));
}

fn month_field(
    ui: &mut Ui,
    controller: &mut PredictionFormController,
    inputs: &mut FieldInputs,
) {
    ui.label_field(UI_TEXT.label_month.as_str());
    let current = controller.form().month;
    let mut selected = current;
    ComboBox::from_id_salt("month_select")
        .width(ui.available_width())
        .selected_text(month_name(current).unwrap_or("-"))
        .show_ui(ui, |ui| {
            for month in 1..=12 {
                if let Some(name) = month_name(month) {
                    ui.selectable_value(&mut selected, month, name);
                }
            }
        });
    if selected != current {
        let outcome = controller.set_field(FormField::Month, &selected.to_string());
        inputs.record(FormField::Month, outcome);
    }
}

fn render_submit(ui: &mut Ui, controller: &mut PredictionFormController) {
    let loading = controller.is_loading();
    let text = if loading {
        UI_TEXT.button_predicting.as_str()
    } else {
        UI_TEXT.button_predict.as_str()
    };

    ui.horizontal(|ui| {
        let width = if loading {
            ui.available_width() - 28.0
        } else {
            ui.available_width()
        };
        let button = Button::new(ui.button_text_primary(text))
            .fill(UI_CONFIG.colors.accent)
            .min_size(vec2(width, 40.0));
        if ui.add_enabled(!loading, button).clicked() {
            if let Err(e) = controller.submit() {
                log::debug!("Submit rejected: {}", e);
            }
        }
        if loading {
            ui.spinner();
        }
    });
}

fn render_banners(ui: &mut Ui, controller: &PredictionFormController) {
    if let Some(error) = controller.error() {
        ui.add_space(12.0);
        ui.banner(
            &format!("{} {}", ICON_WARNING, error),
            UI_CONFIG.colors.error_fill,
            UI_CONFIG.colors.error_text,
        );
    }
    if controller.show_success() {
        ui.add_space(12.0);
        ui.banner(
            &UI_TEXT.banner_success,
            UI_CONFIG.colors.success_fill,
            UI_CONFIG.colors.success_text,
        );
    }
}

fn render_features(ui: &mut Ui) {
    ui.columns(UI_TEXT.features.len(), |cols| {
        for (col, (title, detail)) in cols.iter_mut().zip(UI_TEXT.features.iter()) {
            col.vertical_centered(|ui| {
                ui.label(colored_subsection_heading(title).strong());
                ui.label_subdued(detail.as_str());
            });
        }
    });
}
