/// Terminal rendition of the success screen: a fixed confirmation and the
/// way back to the entry route. No state, no side effects.
pub fn success_view() -> String {
    [
        "",
        "  ✔ Ponto de coleta cadastrado com sucesso!",
        "",
        "  Ok - voltar para o início",
        "",
    ]
    .join("\n")
}
