//! Typed wrappers for common Sedona `ST_*` functions.
//!
//! Each wrapper normalizes its arguments like [`call_sedona_function`](crate::call_sedona_function):
//! a `&str` is a column name, so pass WKT or GeoJSON text through [`lit`](crate::lit).

use crate::column::Column;
use crate::sedona::{SedonaArg, SedonaFunction, to_connect_column};

fn sedona_call(name: &str, args: Vec<SedonaArg>) -> Column {
    let args = args
        .into_iter()
        .map(|a| to_connect_column(a).into_expr())
        .collect();
    SedonaFunction::new(name, args).into_column()
}

macro_rules! sedona_func {
    // any iterable of arguments as a single parameter
    ($func_name:ident, $sql_name:literal, [args: _], $doc:expr) => {
        #[doc = $doc]
        pub fn $func_name<I>(args: I) -> Column
        where
            I: IntoIterator,
            I::Item: Into<SedonaArg>,
        {
            sedona_call($sql_name, args.into_iter().map(Into::into).collect())
        }
    };

    ($func_name:ident, $sql_name:literal, [$( $param_name:ident ),+], $doc:expr) => {
        #[doc = $doc]
        pub fn $func_name($( $param_name: impl Into<SedonaArg> ),+) -> Column {
            sedona_call($sql_name, vec![$( $param_name.into() ),+])
        }
    };
}

// Constructors

sedona_func!(st_point, "ST_Point", [x, y], "Point geometry from X and Y.");
sedona_func!(st_point_z, "ST_PointZ", [x, y, z], "Point geometry from X, Y and Z.");
sedona_func!(st_make_point, "ST_MakePoint", [x, y], "Point geometry from X and Y.");
sedona_func!(st_geom_from_wkt, "ST_GeomFromWKT", [wkt], "Geometry from Well-Known Text.");
sedona_func!(st_geom_from_wkb, "ST_GeomFromWKB", [wkb], "Geometry from Well-Known Binary.");
sedona_func!(st_geom_from_geojson, "ST_GeomFromGeoJSON", [geojson], "Geometry from GeoJSON text.");
sedona_func!(
    st_polygon_from_envelope,
    "ST_PolygonFromEnvelope",
    [min_x, min_y, max_x, max_y],
    "Rectangular polygon from its bounds."
);
sedona_func!(st_collect, "ST_Collect", [args: _], "Collection geometry from the given geometries.");

// Outputs and accessors

sedona_func!(st_as_text, "ST_AsText", [geom], "Well-Known Text of a geometry.");
sedona_func!(st_as_geojson, "ST_AsGeoJSON", [geom], "GeoJSON text of a geometry.");
sedona_func!(st_x, "ST_X", [geom], "X coordinate of a point.");
sedona_func!(st_y, "ST_Y", [geom], "Y coordinate of a point.");
sedona_func!(st_srid, "ST_SRID", [geom], "Spatial reference id of a geometry.");

// Measurements and processing

sedona_func!(st_area, "ST_Area", [geom], "Area of a geometry.");
sedona_func!(st_length, "ST_Length", [geom], "Length of a linear geometry.");
sedona_func!(st_distance, "ST_Distance", [a, b], "Cartesian distance between two geometries.");
sedona_func!(st_buffer, "ST_Buffer", [geom, distance], "Geometry buffered by a distance.");
sedona_func!(st_centroid, "ST_Centroid", [geom], "Centroid of a geometry.");
sedona_func!(st_envelope, "ST_Envelope", [geom], "Bounding box of a geometry.");
sedona_func!(st_intersection, "ST_Intersection", [a, b], "Intersection of two geometries.");
sedona_func!(st_set_srid, "ST_SetSRID", [geom, srid], "Geometry with its SRID replaced.");
sedona_func!(
    st_transform,
    "ST_Transform",
    [geom, source_crs, target_crs],
    "Geometry reprojected from one CRS to another."
);

// Predicates

sedona_func!(st_intersects, "ST_Intersects", [a, b], "Whether two geometries intersect.");
sedona_func!(st_contains, "ST_Contains", [a, b], "Whether `a` contains `b`.");
sedona_func!(st_within, "ST_Within", [a, b], "Whether `a` is within `b`.");
sedona_func!(st_covers, "ST_Covers", [a, b], "Whether `a` covers `b`.");
sedona_func!(st_covered_by, "ST_CoveredBy", [a, b], "Whether `a` is covered by `b`.");
sedona_func!(st_touches, "ST_Touches", [a, b], "Whether two geometries touch.");
sedona_func!(st_disjoint, "ST_Disjoint", [a, b], "Whether two geometries are disjoint.");
sedona_func!(st_equals, "ST_Equals", [a, b], "Whether two geometries are spatially equal.");
sedona_func!(
    st_dwithin,
    "ST_DWithin",
    [a, b, distance],
    "Whether two geometries are within a distance of each other."
);

// Aggregates

sedona_func!(st_envelope_aggr, "ST_Envelope_Aggr", [geom], "Bounding box of all geometries in a group.");
sedona_func!(st_union_aggr, "ST_Union_Aggr", [geom], "Union of all geometries in a group.");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{col, lit};

    #[test]
    fn test_wrapper_renders_sql_name() {
        assert_eq!(st_point(1.0, 2.0).expr().to_string(), "ST_Point(1.0, 2.0)");
        assert_eq!(
            st_geom_from_wkt(lit("POINT (1 2)")).expr().to_string(),
            "ST_GeomFromWKT(POINT (1 2))"
        );
        assert_eq!(st_area("geom").expr().to_string(), "ST_Area(geom)");
    }

    #[test]
    fn test_wrappers_nest() {
        let c = st_buffer(st_transform("geom", lit("EPSG:4326"), lit("EPSG:3857")), 25);
        assert_eq!(
            c.expr().to_string(),
            "ST_Buffer(ST_Transform(geom, EPSG:4326, EPSG:3857), 25)"
        );
    }

    #[test]
    fn test_collect_takes_any_number_of_args() {
        let c = st_collect([col("a"), col("b"), col("c")]);
        assert_eq!(c.expr().to_string(), "ST_Collect(a, b, c)");
        let empty: Vec<SedonaArg> = Vec::new();
        assert_eq!(st_collect(empty).expr().to_string(), "ST_Collect()");
    }
}
