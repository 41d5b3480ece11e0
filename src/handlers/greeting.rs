pub const URI_TEMPLATE: &str = "greeting://{name}";

pub fn greeting(name: &str) -> String {
    format!("안녕하세요, {}님!", name)
}
