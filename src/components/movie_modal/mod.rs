// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Movie detail overlay.

mod event;
mod render;

use crate::{model::Movie, tmdb::image::{ImageSize, image_url}};

pub(crate) struct MovieModal {
    movie: Option<Movie>,
    image_base_url: String,
    poster_size: ImageSize,
    backdrop_size: ImageSize,
}

impl MovieModal {
    pub(crate) fn new(image_base_url: String, poster_size: ImageSize, backdrop_size: ImageSize) -> Self {
        Self {
            movie: None,
            image_base_url,
            poster_size,
            backdrop_size,
        }
    }

    pub(crate) fn open(&mut self, movie: Movie) {
        self.movie = Some(movie);
    }

    pub(crate) fn close(&mut self) {
        self.movie = None;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.movie.is_some()
    }

    pub(crate) fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    fn poster_url(&self, movie: &Movie) -> String {
        image_url(&self.image_base_url, movie.poster_path.as_deref(), self.poster_size)
    }

    fn backdrop_url(&self, movie: &Movie) -> String {
        image_url(&self.image_base_url, movie.backdrop_path.as_deref(), self.backdrop_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls_use_configured_sizes() {
        let modal = MovieModal::new("https://image.tmdb.org/t/p".to_string(), ImageSize::W500, ImageSize::Original);
        let movie = Movie {
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            ..Movie::default()
        };

        assert_eq!(modal.poster_url(&movie), "https://image.tmdb.org/t/p/w500/poster.jpg");
        assert_eq!(modal.backdrop_url(&movie), "");
    }
}
