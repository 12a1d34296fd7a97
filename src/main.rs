use impact_portal::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
