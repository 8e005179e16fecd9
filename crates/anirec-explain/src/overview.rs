/// Plain-text description of how recommendations are produced.
pub fn model_overview() -> &'static str {
    "This recommender compares synopses.\n\
     Each synopsis is turned into a TF-IDF vector (English stop words removed,\n\
     rare words weighted up), and the cosine similarity between every pair of\n\
     vectors is computed once when the catalog is loaded. Given a list of\n\
     favorite titles, their similarity scores are summed and the closest\n\
     titles you have not already listed are returned.\n\
     \n\
     Explanations, when enabled, come from an optional local language model\n\
     and never change the ranking."
}
