//! Built-in demonstration catalog of 17 films with French keyword features.

use super::CatalogEntry;

const FILMS: [(&str, &str); 17] = [
    ("Aladdin", "animation disney magie"),
    ("Le Roi Lion", "animation disney animaux afrique"),
    ("La Reine des Neiges", "animation disney glace chanson"),
    ("Toy Story", "animation pixar jouets"),
    ("Titanic", "romance drame bateau dicaprio"),
    ("Avatar", "scifi action espace cameron"),
    ("Star Wars", "scifi espace guerre lucas"),
    ("Avengers", "action superheros marvel"),
    ("Pulp Fiction", "crime drame tarantino"),
    ("Le Parrain", "crime mafia drame"),
    ("Inception", "scifi reve nolan"),
    ("Interstellar", "scifi espace temps nolan"),
    ("Le Fabuleux Destin d'Am\u{e9}lie Poulain", "romance france paris"),
    ("Le Seigneur des Anneaux", "fantasy guerre anneau"),
    ("Harry Potter", "fantasy magie sorcier ecole"),
    ("Spider-Man", "action superheros araignee"),
    ("Jurassic Park", "aventure dinosaure parc"),
];

/// The demonstration film catalog, in its canonical order.
///
/// # Examples
///
/// ```
/// use cinematch::catalog::{sample, Catalog};
///
/// let catalog = Catalog::new(sample::films()).expect("sample is not empty");
/// assert_eq!(catalog.len(), 17);
/// assert_eq!(catalog.title_at(0).expect("in range"), "Aladdin");
/// ```
#[must_use]
pub fn films() -> Vec<CatalogEntry> {
    FILMS
        .iter()
        .map(|&(title, features)| CatalogEntry::new(title, features))
        .collect()
}
