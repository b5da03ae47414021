use super::*;
use forms::FormSpec;
use forms::endpoints::{CropYield, DiseaseDetection, MarketForecast, WeatherForecast};

fn field<F: FormSpec>(name: &str) -> &'static FieldSpec {
    F::schema().field(name).expect("declared field")
}

#[test]
fn float_fields_accept_any_decimal() {
    let attrs = input_attrs(field::<CropYield>("Area"));
    assert_eq!(attrs.input_type, "number");
    assert_eq!(attrs.step, Some("any"));
    assert_eq!(attrs.min, None);
}

#[test]
fn bounded_int_carries_min_and_max() {
    let attrs = input_attrs(field::<WeatherForecast>("days"));
    assert_eq!(attrs.min.as_deref(), Some("1"));
    assert_eq!(attrs.max.as_deref(), Some("14"));
    assert_eq!(attrs.step, Some("1"));
}

#[test]
fn unbounded_int_has_no_limits() {
    let attrs = input_attrs(field::<CropYield>("Crop_Year"));
    assert_eq!((attrs.min, attrs.max), (None, None));
}

#[test]
fn text_fields_render_plain_inputs() {
    let spec = field::<CropYield>("Crop");
    assert_eq!(control(spec), Control::Input);
    assert_eq!(input_attrs(spec).input_type, "text");
    assert_eq!(input_attrs(spec).step, None);
}

#[test]
fn choice_renders_select_with_options() {
    let spec = field::<MarketForecast>("crop_name");
    assert_eq!(
        control(spec),
        Control::Select(&["Wheat", "Rice", "Maize", "Soybean"])
    );
}

#[test]
fn image_is_left_to_page() {
    assert_eq!(control(field::<DiseaseDetection>("image_base64")), Control::Custom);
}

#[test]
fn contact_message_is_textarea() {
    let spec = forms::contact::SCHEMA.field("message").expect("declared");
    assert_eq!(control(spec), Control::TextArea);
    let email = forms::contact::SCHEMA.field("email").expect("declared");
    assert_eq!(input_attrs(email).input_type, "email");
}

#[test]
fn blank_choice_shows_placeholder_not_first_option() {
    let spec = field::<MarketForecast>("crop_name");
    let form = forms::FormState::new(MarketForecast::schema());
    let options = select_options(spec, form.get("crop_name"));

    assert_eq!(options.len(), 5);
    assert_eq!(options[0].value, "");
    assert_eq!(options[0].label, "Select a crop");
    assert!(options[0].selected);
    assert!(options[0].disabled);
    assert!(options[1..].iter().all(|option| !option.selected));
}

#[test]
fn picked_choice_is_the_only_selected_option() {
    let spec = field::<MarketForecast>("crop_name");
    let options = select_options(spec, "Maize");

    let selected: Vec<_> = options
        .iter()
        .filter(|option| option.selected)
        .map(|option| option.value)
        .collect();
    assert_eq!(selected, vec!["Maize"]);
    assert!(!options[0].selected);
}

#[test]
fn choice_outside_options_falls_back_to_placeholder() {
    let spec = field::<MarketForecast>("crop_name");
    let options = select_options(spec, "Cotton");
    assert!(options[0].selected);
    assert_eq!(options.iter().filter(|option| option.selected).count(), 1);
}

#[test]
fn select_without_placeholder_uses_default_prompt() {
    let spec = FieldSpec::new("crop", "Crop", forms::FieldKind::Choice(&["Rice"]));
    assert_eq!(select_options(&spec, "")[0].label, DEFAULT_SELECT_PROMPT);
}

#[test]
fn non_choice_fields_have_no_options() {
    assert!(select_options(field::<WeatherForecast>("days"), "7").is_empty());
}

#[test]
fn untouched_market_form_is_rejected_before_sending() {
    let mut form = forms::RemoteForm::<MarketForecast>::new();
    let errors = form.begin_submit().expect_err("crop not picked");
    assert_eq!(errors[0].field(), "crop_name");

    form.set_field("crop_name", "Wheat");
    assert!(form.begin_submit().is_ok());
}
